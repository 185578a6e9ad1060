//! Errors surfaced by report building and export.
//!
//! Three kinds matter to the user:
//!
//! - [`Error::InvalidInput`]: bad year, month, format, or body name. Nothing
//!   was computed; the caller may simply ask again.
//! - [`Error::ComputationFailure`]: the ephemeris provider could not produce
//!   a value. The whole build is abandoned; no partial report exists.
//! - [`Error::ExportFailure`]: the destination could not be written. The
//!   report is untouched and can be exported elsewhere.

use std::io;
use std::path::PathBuf;

use jiff::civil::Date;

use crate::config::ConfigError;
use crate::ephemeris::EphemerisError;
use crate::model::CelestialBody;
use crate::render::ExportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{}", describe_computation(.body, .date, .source))]
    ComputationFailure {
        /// `None` when the sidereal time itself failed.
        body: Option<CelestialBody>,
        date: Date,
        source: EphemerisError,
    },

    #[error("failed to export {}: {source}", .path.display())]
    ExportFailure { path: PathBuf, source: ExportError },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing to the terminal or reading a prompt answer failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Io(_))
    }
}

#[allow(clippy::ref_option)]
fn describe_computation(
    body: &Option<CelestialBody>,
    date: &Date,
    source: &EphemerisError,
) -> String {
    match body {
        Some(body) => format!("cannot compute {} on {date}: {source}", body.name()),
        None => format!("cannot compute sidereal time on {date}: {source}"),
    }
}
