//! Greenwich mean sidereal time.
//!
//! ERA from IERS Conventions 2010 (Eq. 5.15) plus the Capitaine et al. 2003
//! polynomial. UT1 is taken as UT; the sub-second difference is below the
//! one-second resolution of the tabulated time.

use std::f64::consts::{PI, TAU};

use super::{J2000_JD, centuries_since_j2000};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, in `[0, 2π)`.
fn earth_rotation_angle(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich mean sidereal time in radians, in `[0, 2π)`.
pub(super) fn greenwich_mean(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let poly_arcsec = 0.014_506
        + t * (4_612.156_534
            + t * (1.391_581_7 + t * (-0.000_000_44 + t * (-0.000_029_956 - t * 0.000_000_036_8))));
    (earth_rotation_angle(jd) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local mean sidereal time for an observer at `east_longitude` radians.
pub(super) fn local_mean(jd: f64, east_longitude: f64) -> f64 {
    (greenwich_mean(jd) + east_longitude).rem_euclid(TAU)
}
