//! Celestial bodies that can be tabulated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A body whose position the ephemeris provider can compute.
///
/// The variant itself is the handle passed to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBody {
    /// Every body, in the default column order.
    pub const ALL: [Self; 10] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Column header: the name cut to six characters, uppercased.
    pub fn abbreviation(self) -> String {
        self.name().chars().take(6).collect::<String>().to_uppercase()
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::invalid_input(format!("unknown body '{wanted}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_truncate_to_six_characters() {
        let headers: Vec<String> = CelestialBody::ALL
            .iter()
            .map(|b| b.abbreviation())
            .collect();
        assert_eq!(
            headers,
            [
                "SUN", "MOON", "MERCUR", "VENUS", "MARS", "JUPITE", "SATURN", "URANUS", "NEPTUN",
                "PLUTO"
            ]
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("jupiter".parse::<CelestialBody>().unwrap(), CelestialBody::Jupiter);
        assert_eq!(" MOON ".parse::<CelestialBody>().unwrap(), CelestialBody::Moon);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "vulcan".parse::<CelestialBody>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
