//! Formatted positions: zodiac longitude and sidereal time.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Sign;

/// A longitude expressed as degree-in-sign, sign, and arc minutes.
///
/// Displays as `DDSSMM`, e.g. `15VI24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacPosition {
    pub degree: u8,
    pub sign: Sign,
    /// Normally 0–59. Legacy rounding can leave 60 here.
    pub minutes: u8,
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{}{:02}", self.degree, self.sign, self.minutes)
    }
}

impl Serialize for ZodiacPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sidereal time of day, displayed as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiderealTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl Serialize for SiderealTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
