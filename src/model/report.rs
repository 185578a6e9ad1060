//! Month and year groupings, and the report the renderers consume.

use crate::calendar::CalendarMonth;

use super::{CelestialBody, DailyRecord};

/// Every day of one calendar month, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthReport {
    pub month: CalendarMonth,
    pub days: Vec<DailyRecord>,
}

impl MonthReport {
    /// Display title, e.g. `JANUARY 2025`.
    pub fn title(&self) -> String {
        self.month.title()
    }
}

/// The twelve months of one year, January first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearReport {
    pub year: i16,
    pub months: Vec<MonthReport>,
}

/// A finished tabulation: the bodies as columns and the months as sections.
///
/// Built once, then handed by reference to any number of renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub bodies: Vec<CelestialBody>,
    pub months: Vec<MonthReport>,
}

impl Report {
    pub fn from_month(bodies: Vec<CelestialBody>, month: MonthReport) -> Self {
        Self {
            bodies,
            months: vec![month],
        }
    }

    pub fn from_year(bodies: Vec<CelestialBody>, year: YearReport) -> Self {
        Self {
            bodies,
            months: year.months,
        }
    }

    /// Column headers for the body columns, in order.
    pub fn body_headers(&self) -> Vec<String> {
        self.bodies.iter().map(|b| b.abbreviation()).collect()
    }

    /// Total number of tabulated days across all months.
    pub fn day_count(&self) -> usize {
        self.months.iter().map(|m| m.days.len()).sum()
    }
}
