//! Angle formatting: ecliptic longitude to zodiac position, and sidereal
//! angle to time of day.
//!
//! Both take raw radians straight from the ephemeris provider and
//! normalize them first, so any finite angle is accepted.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::model::{SiderealTime, Sign, ZodiacPosition};

/// How a minute value that rounds up to 60 is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinuteRounding {
    /// Carry 60′ into the next degree, and 30° into the next sign.
    #[default]
    Carry,
    /// Leave `60` in the minutes field, matching files written by the
    /// earlier tool.
    Legacy,
}

/// Wraps `radians` into `[0, 2π)`.
fn normalize(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly TAU.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Formats an ecliptic longitude as `DDSSMM`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn zodiacal(longitude: f64, rounding: MinuteRounding) -> ZodiacPosition {
    let degrees = normalize(longitude).to_degrees();

    let mut sign = Sign::from_index((degrees / 30.0).floor() as usize);
    let mut degree = (degrees % 30.0).floor() as u8;
    let mut minutes = ((degrees % 1.0) * 60.0).round_ties_even() as u8;

    if minutes == 60 && rounding == MinuteRounding::Carry {
        minutes = 0;
        degree += 1;
        if degree == 30 {
            degree = 0;
            sign = sign.next();
        }
    }

    ZodiacPosition {
        degree,
        sign,
        minutes,
    }
}

/// Formats a sidereal angle as `HH:MM:SS`, truncating every field.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sidereal(angle: f64) -> SiderealTime {
    let hours = normalize(angle).to_degrees() / 15.0;

    SiderealTime {
        hours: (hours.floor() as u8) % 24,
        minutes: ((hours % 1.0) * 60.0).floor() as u8,
        seconds: (((hours * 60.0) % 1.0) * 60.0).floor() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn deg(d: f64) -> f64 {
        d.to_radians()
    }

    fn fmt(d: f64) -> String {
        zodiacal(deg(d), MinuteRounding::Carry).to_string()
    }

    #[test]
    fn zero_is_start_of_aries() {
        assert_eq!(fmt(0.0), "00AR00");
    }

    #[test]
    fn formats_degree_sign_and_minutes() {
        // 165.4° = 15° Virgo 24′
        assert_eq!(fmt(165.4), "15VI24");
        assert_eq!(fmt(359.5), "29PI30");
        assert_eq!(fmt(30.0), "00TA00");
    }

    #[test]
    fn negative_longitudes_wrap() {
        assert_eq!(fmt(-30.0), "00PI00");
        assert_eq!(fmt(-0.5), "29PI30");
    }

    #[test]
    fn carries_rounded_minutes_into_degree() {
        // 10.9999° rounds to 60′.
        assert_eq!(fmt(10.9999), "11AR00");
    }

    #[test]
    fn carries_across_sign_boundary() {
        assert_eq!(fmt(59.9999), "00GE00");
        assert_eq!(fmt(359.9999), "00AR00");
    }

    #[test]
    fn legacy_rounding_keeps_sixty_minutes() {
        let pos = zodiacal(deg(59.9999), MinuteRounding::Legacy);
        assert_eq!(pos.to_string(), "29TA60");
    }

    #[test]
    fn sidereal_zero_is_midnight() {
        assert_eq!(sidereal(0.0).to_string(), "00:00:00");
    }

    #[test]
    fn sidereal_truncates_fields() {
        // 99.9684° = 6.66456h = 06:39:52.4
        assert_eq!(sidereal(deg(99.9684)).to_string(), "06:39:52");
        // 16.3123° = 1.087487h = 01:05:14.95
        assert_eq!(sidereal(deg(16.3123)).to_string(), "01:05:14");
    }

    #[test]
    fn sidereal_just_below_full_turn_is_hour_23() {
        assert_eq!(sidereal(deg(359.9999)).to_string(), "23:59:59");
    }

    #[test]
    fn sidereal_wraps_full_turns() {
        assert_eq!(sidereal(deg(376.3123)).to_string(), "01:05:14");
        assert_eq!(sidereal(-deg(14.0)).hours, 23);
    }

    proptest! {
        #[test]
        fn zodiac_is_invariant_under_full_turns(a in 0.0f64..TAU, k in -8i32..=8) {
            let shifted = a + TAU * f64::from(k);
            prop_assert_eq!(
                zodiacal(a, MinuteRounding::Carry).to_string(),
                zodiacal(shifted, MinuteRounding::Carry).to_string()
            );
        }

        #[test]
        fn zodiac_fields_stay_in_range(a in -1.0e4f64..1.0e4) {
            let pos = zodiacal(a, MinuteRounding::Carry);
            prop_assert!(pos.sign.index() <= 11);
            prop_assert!(pos.degree <= 29);
            prop_assert!(pos.minutes <= 59);

            let legacy = zodiacal(a, MinuteRounding::Legacy);
            prop_assert!(legacy.degree <= 29);
            prop_assert!(legacy.minutes <= 60);
        }

        #[test]
        fn zodiac_is_monotonic_within_a_turn(a in 0.0f64..358.0, step in 0.02f64..1.0) {
            let lower = zodiacal(deg(a), MinuteRounding::Carry);
            let upper = zodiacal(deg(a + step), MinuteRounding::Carry);
            let key = |p: ZodiacPosition| {
                (p.sign.index(), p.degree, p.minutes)
            };
            prop_assert!(key(lower) <= key(upper));
        }

        #[test]
        fn sidereal_fields_stay_in_range(a in -1.0e4f64..1.0e4) {
            let time = sidereal(a);
            prop_assert!(time.hours <= 23);
            prop_assert!(time.minutes <= 59);
            prop_assert!(time.seconds <= 59);
        }
    }
}
