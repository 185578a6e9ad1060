//! Report building: daily records, grouped into months and years.
//!
//! All ephemeris work for a report happens here, before anything is
//! rendered. A failure for any body on any date abandons the whole build.

use jiff::civil::Date;

use crate::calendar::{self, CalendarMonth};
use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::format::{self, MinuteRounding};
use crate::model::{CelestialBody, DailyRecord, MonthReport, Report, YearReport};

/// Builds reports for a fixed body list against one ephemeris provider.
pub struct Tabulator<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
    bodies: &'a [CelestialBody],
    rounding: MinuteRounding,
}

impl<'a, E: Ephemeris + ?Sized> Tabulator<'a, E> {
    pub fn new(ephemeris: &'a E, bodies: &'a [CelestialBody], rounding: MinuteRounding) -> Self {
        Self {
            ephemeris,
            bodies,
            rounding,
        }
    }

    /// One day's record: weekday, day of month, sidereal time, and one
    /// position per body in request order.
    pub fn record(&self, date: Date) -> Result<DailyRecord> {
        let sidereal_angle =
            self.ephemeris
                .sidereal_time(date)
                .map_err(|source| Error::ComputationFailure {
                    body: None,
                    date,
                    source,
                })?;

        let positions = self
            .bodies
            .iter()
            .map(|&body| {
                self.ephemeris
                    .longitude(body, date)
                    .map(|longitude| format::zodiacal(longitude, self.rounding))
                    .map_err(|source| Error::ComputationFailure {
                        body: Some(body),
                        date,
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DailyRecord {
            date,
            day_of_week: weekday_abbreviation(date),
            day_of_month: format!("{:02}", date.day()),
            sidereal_time: format::sidereal(sidereal_angle),
            positions,
        })
    }

    /// Every day of `month`.
    pub fn month(&self, month: CalendarMonth) -> Result<MonthReport> {
        log::debug!("tabulating {}-{:02}", month.year(), month.month());
        let records = month
            .days()
            .map(|date| self.record(date))
            .collect::<Result<Vec<_>>>()?;
        Ok(assemble_month(month, records))
    }

    /// All twelve months of `year`.
    pub fn year(&self, year: i16) -> Result<YearReport> {
        let months = calendar::months_of_year(year)?
            .into_iter()
            .map(|month| self.month(month))
            .collect::<Result<Vec<_>>>()?;
        Ok(assemble_year(year, months))
    }

    /// A ready-to-render report for one month.
    pub fn month_report(&self, year: i16, month: i8) -> Result<Report> {
        let month = CalendarMonth::new(year, month)?;
        let report = Report::from_month(self.bodies.to_vec(), self.month(month)?);
        log::info!("built {} with {} days", month.title(), report.day_count());
        Ok(report)
    }

    /// A ready-to-render report for a whole year.
    pub fn year_report(&self, year: i16) -> Result<Report> {
        let report = Report::from_year(self.bodies.to_vec(), self.year(year)?);
        log::info!("built year {year} with {} days", report.day_count());
        Ok(report)
    }
}

/// First two letters of the English weekday name, uppercased.
fn weekday_abbreviation(date: Date) -> String {
    date.strftime("%A")
        .to_string()
        .chars()
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Groups records under their month, ascending by date.
pub fn assemble_month(month: CalendarMonth, mut records: Vec<DailyRecord>) -> MonthReport {
    records.sort_by_key(|r| r.date);
    MonthReport {
        month,
        days: records,
    }
}

/// Groups month reports under their year, January first.
pub fn assemble_year(year: i16, mut months: Vec<MonthReport>) -> YearReport {
    months.sort_by_key(|m| m.month);
    YearReport { year, months }
}
