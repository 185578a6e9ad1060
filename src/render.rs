//! Report renderers: terminal table, JSON, and CSV.
//!
//! Every renderer reads a finished [`Report`] and never changes it, so one
//! build can be printed and exported any number of times.

mod delimited;
mod json;
mod table;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Report;

pub use delimited::to_csv;
pub use json::to_json;
pub use table::write_table;

/// Errors while serializing or writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// File formats a report can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Name used when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => "ephemeris.json",
            Self::Csv => "ephemeris.csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::invalid_input(format!(
                "unrecognized export format '{other}' (expected json or csv)"
            ))),
        }
    }
}

/// Serializes `report` in `format`.
pub fn render(
    report: &Report,
    format: ExportFormat,
) -> core::result::Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Json => Ok(to_json(report)?.into_bytes()),
        ExportFormat::Csv => to_csv(report),
    }
}

/// Writes `report` to `path` in `format`.
///
/// The document is fully rendered before the file is touched, so a
/// serialization error never leaves a truncated file behind.
pub fn export(report: &Report, format: ExportFormat, path: &Path) -> Result<PathBuf> {
    let failure = |source: ExportError| Error::ExportFailure {
        path: path.to_path_buf(),
        source,
    };

    let bytes = render(report, format).map_err(failure)?;
    fs::write(path, bytes).map_err(|e| failure(e.into()))?;

    log::info!("{format} export written to {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::calendar::CalendarMonth;
    use crate::model::{CelestialBody, DailyRecord, MonthReport, SiderealTime, Sign, ZodiacPosition};

    /// Two days of March 2025 for Sun and Mercury.
    pub(crate) fn sample_report() -> Report {
        let day = |d: i8, dow: &str, sun_deg: u8| DailyRecord {
            date: jiff::civil::date(2025, 3, d),
            day_of_week: dow.into(),
            day_of_month: format!("{d:02}"),
            sidereal_time: SiderealTime {
                hours: 10,
                minutes: 36,
                seconds: u8::try_from(d).unwrap(),
            },
            positions: vec![
                ZodiacPosition {
                    degree: sun_deg,
                    sign: Sign::Pisces,
                    minutes: 50,
                },
                ZodiacPosition {
                    degree: 3,
                    sign: Sign::Aries,
                    minutes: 7,
                },
            ],
        };

        Report::from_month(
            vec![CelestialBody::Sun, CelestialBody::Mercury],
            MonthReport {
                month: CalendarMonth::new(2025, 3).unwrap(),
                days: vec![day(1, "SA", 10), day(2, "SU", 11)],
            },
        )
    }

    #[test]
    fn parses_formats_case_insensitively() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" csv ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn exports_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        let written = export(&sample_report(), ExportFormat::Json, &path).unwrap();
        assert_eq!(written, path);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("{\n    \"MARCH 2025\": ["));
    }

    #[test]
    fn exports_csv_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        export(&sample_report(), ExportFormat::Csv, &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("DATE;SID.TIME;SUN;MERCUR"));
    }

    #[test]
    fn unwritable_destination_is_an_export_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let report = sample_report();

        let err = export(&report, ExportFormat::Json, &path).unwrap_err();
        assert!(matches!(err, Error::ExportFailure { .. }));
        assert!(!path.exists());

        // The report is still usable for another destination.
        let retry = dir.path().join("out.json");
        export(&report, ExportFormat::Json, &retry).unwrap();
        assert!(retry.exists());
    }
}
