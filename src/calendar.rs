//! Calendar iteration: which dates a report covers.
//!
//! Months are validated up front so a bad request fails before any
//! ephemeris work starts. Day sequences are lazy and can be re-created
//! from the same [`CalendarMonth`] as often as needed.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::error::{Error, Result};

/// A validated year and month in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: Date,
}

impl CalendarMonth {
    /// Fails with [`Error::InvalidInput`] when `month` is outside 1–12 or
    /// `year` is outside the supported calendar range.
    pub fn new(year: i16, month: i8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_input(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        let first = Date::new(year, month, 1)
            .map_err(|e| Error::invalid_input(format!("year {year} is not supported: {e}")))?;
        Ok(Self { first })
    }

    pub fn year(self) -> i16 {
        self.first.year()
    }

    pub fn month(self) -> i8 {
        self.first.month()
    }

    /// Number of days, accounting for leap-year February.
    pub fn day_count(self) -> usize {
        usize::try_from(self.first.days_in_month()).unwrap_or(0)
    }

    /// Every date of the month, ascending.
    pub fn days(self) -> impl Iterator<Item = Date> {
        self.first.series(1.day()).take(self.day_count())
    }

    /// English month name and year, uppercased: `FEBRUARY 2024`.
    pub fn title(self) -> String {
        self.first.strftime("%B %Y").to_string().to_uppercase()
    }
}

/// The twelve months of `year`, January first.
pub fn months_of_year(year: i16) -> Result<Vec<CalendarMonth>> {
    (1..=12).map(|month| CalendarMonth::new(year, month)).collect()
}

/// Parses a user-supplied year such as `2025`.
pub fn parse_year(text: &str) -> Result<i16> {
    let text = text.trim();
    let year: i16 = text
        .parse()
        .map_err(|_| Error::invalid_input(format!("year must be a number, got '{text}'")))?;
    // Validate the range now rather than at build time.
    CalendarMonth::new(year, 1)?;
    Ok(year)
}

/// Parses a user-supplied month number (1–12).
pub fn parse_month(text: &str) -> Result<i8> {
    let text = text.trim();
    let month: i8 = text
        .parse()
        .map_err(|_| Error::invalid_input(format!("month must be a number, got '{text}'")))?;
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_input(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(month)
}
