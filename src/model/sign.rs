//! The twelve zodiac signs, 30° each, starting from Aries at 0°.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All signs in ecliptic order (index 0 = Aries, 11 = Pisces).
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Sign at a position in [`Sign::ALL`], wrapping past Pisces.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The sign that follows this one, Pisces wrapping to Aries.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Two-letter code used in tabulated positions.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Aries => "AR",
            Self::Taurus => "TA",
            Self::Gemini => "GE",
            Self::Cancer => "CN",
            Self::Leo => "LE",
            Self::Virgo => "VI",
            Self::Libra => "LI",
            Self::Scorpio => "SC",
            Self::Sagittarius => "SG",
            Self::Capricorn => "CP",
            Self::Aquarius => "AQ",
            Self::Pisces => "PI",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_ecliptic_order() {
        let codes: Vec<&str> = Sign::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes.join(" "), "AR TA GE CN LE VI LI SC SG CP AQ PI");
    }

    #[test]
    fn index_round_trips() {
        for (i, sign) in Sign::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Sign::from_index(i), *sign);
        }
    }

    #[test]
    fn pisces_wraps_to_aries() {
        assert_eq!(Sign::Pisces.next(), Sign::Aries);
        assert_eq!(Sign::from_index(12), Sign::Aries);
    }
}
