//! Ephemeris provider seam.
//!
//! The tabulation core only ever asks two questions: where is a body along
//! the ecliptic on a date, and what is the sidereal time on that date.
//! [`Ephemeris`] is that contract. [`MeanElements`] is the built-in
//! low-precision backend; any other astronomy backend can stand in.

mod mean_elements;
mod moon;
mod sidereal;

use jiff::civil::{Date, date};

use crate::model::CelestialBody;

pub use mean_elements::MeanElements;

/// Errors an ephemeris provider can report.
#[derive(Debug, thiserror::Error)]
pub enum EphemerisError {
    #[error("{date} is outside the supported range")]
    OutOfRange { date: Date },

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}

pub type Result<T> = core::result::Result<T, EphemerisError>;

/// Computes raw angles for a calendar date at 0h UT.
pub trait Ephemeris {
    /// Geocentric ecliptic longitude of `body`, in radians.
    fn longitude(&self, body: CelestialBody, date: Date) -> Result<f64>;

    /// Local sidereal time, as an angle in radians.
    fn sidereal_time(&self, date: Date) -> Result<f64>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn longitude(&self, body: CelestialBody, date: Date) -> Result<f64> {
        (**self).longitude(body, date)
    }

    fn sidereal_time(&self, date: Date) -> Result<f64> {
        (**self).sidereal_time(date)
    }
}

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub(crate) const J2000_JD: f64 = 2_451_545.0;

const J2000_DATE: Date = date(2000, 1, 1);

/// Julian Date at 0h UT of `day`.
pub(crate) fn julian_day(day: Date) -> Result<f64> {
    let days = day.since(J2000_DATE)?.get_days();
    Ok(2_451_544.5 + f64::from(days))
}

/// Julian centuries since J2000.0.
pub(crate) fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_of_j2000_midnight() {
        assert!((julian_day(date(2000, 1, 1)).unwrap() - 2_451_544.5).abs() < 1e-9);
    }

    #[test]
    fn julian_day_before_epoch() {
        // 1858-11-17 is MJD 0.
        assert!((julian_day(date(1858, 11, 17)).unwrap() - 2_400_000.5).abs() < 1e-9);
    }

    #[test]
    fn julian_day_after_epoch() {
        assert!((julian_day(date(2025, 1, 1)).unwrap() - 2_460_676.5).abs() < 1e-9);
    }
}
