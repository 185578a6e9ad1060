//! The consultation state machine behind the interactive prompt.
//!
//! A session walks `Idle → Configuring → Reporting → Idle` until it is told
//! to quit. It never reads a terminal itself: the driver turns answers into
//! [`Command`]s, so the whole flow can be exercised headlessly.

use std::fmt;
use std::mem;
use std::path::PathBuf;

use crate::calendar;
use crate::config::Config;
use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::format::MinuteRounding;
use crate::model::{CelestialBody, Report};
use crate::render::{self, ExportFormat};
use crate::tabulate::Tabulator;

/// What a consultation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Year,
    Month,
}

/// One step of user input, still as raw text where it needs parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Consult(Scope),
    Year(String),
    Month(String),
    /// `json`, `csv`, or `none`/empty to skip exporting.
    Export(String),
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consult(Scope::Year) => f.write_str("a yearly consultation"),
            Self::Consult(Scope::Month) => f.write_str("a monthly consultation"),
            Self::Year(_) => f.write_str("a year"),
            Self::Month(_) => f.write_str("a month"),
            Self::Export(_) => f.write_str("an export choice"),
            Self::Quit => f.write_str("quit"),
        }
    }
}

#[derive(Debug)]
pub enum State {
    Idle,
    Configuring {
        scope: Scope,
        /// Month already given, for monthly consultations.
        month: Option<i8>,
    },
    Reporting(Report),
    Finished,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Configuring { .. } => f.write_str("configuring a consultation"),
            Self::Reporting(_) => f.write_str("waiting for an export choice"),
            Self::Finished => f.write_str("finished"),
        }
    }
}

/// Result of a successfully handled command.
#[derive(Debug, PartialEq)]
pub enum Outcome<'a> {
    /// More input is needed before anything is computed.
    AwaitingInput,
    /// A report was built and is ready to render.
    Reported(&'a Report),
    Exported {
        format: ExportFormat,
        path: PathBuf,
    },
    /// The report was discarded without exporting.
    Skipped,
    Finished,
}

pub struct Session<E: Ephemeris> {
    ephemeris: E,
    bodies: Vec<CelestialBody>,
    rounding: MinuteRounding,
    export_dir: Option<PathBuf>,
    state: State,
}

impl<E: Ephemeris> Session<E> {
    pub fn new(ephemeris: E, bodies: Vec<CelestialBody>, rounding: MinuteRounding) -> Self {
        Self {
            ephemeris,
            bodies,
            rounding,
            export_dir: None,
            state: State::Idle,
        }
    }

    pub fn from_config(ephemeris: E, config: &Config) -> Self {
        let mut session = Self::new(ephemeris, config.bodies.clone(), config.minute_rounding);
        session.export_dir.clone_from(&config.export_dir);
        session
    }

    /// Directory exports are written to, under their default file name.
    #[must_use]
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    /// The report awaiting an export decision, if any.
    pub fn report(&self) -> Option<&Report> {
        match &self.state {
            State::Reporting(report) => Some(report),
            _ => None,
        }
    }

    /// The question to ask before the next command.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            State::Idle => Some("Consult ephemeris by year or month? (y/m): "),
            State::Configuring {
                scope: Scope::Month,
                month: None,
            } => Some("Month (1-12): "),
            State::Configuring { .. } => Some("Year (e.g., 2025): "),
            State::Reporting(_) => Some("Export data? (json/csv, blank to skip): "),
            State::Finished => None,
        }
    }

    /// Interprets one line of input as the command the current state expects.
    pub fn command_for(&self, line: &str) -> Result<Command> {
        let line = line.trim();
        match self.state {
            State::Idle => match line.to_lowercase().as_str() {
                "y" => Ok(Command::Consult(Scope::Year)),
                "m" => Ok(Command::Consult(Scope::Month)),
                "q" | "quit" => Ok(Command::Quit),
                _ => Err(Error::invalid_input(
                    "please choose a valid option: 'y' or 'm'",
                )),
            },
            State::Configuring {
                scope: Scope::Month,
                month: None,
            } => Ok(Command::Month(line.to_string())),
            State::Configuring { .. } => Ok(Command::Year(line.to_string())),
            State::Reporting(_) => Ok(Command::Export(line.to_string())),
            State::Finished => Ok(Command::Quit),
        }
    }

    /// Advances the session by one command.
    ///
    /// Bad year or month text abandons the consultation. A bad export
    /// choice or a failed write keeps the report so the export can be
    /// retried. A command the current state does not expect is rejected and
    /// changes nothing.
    pub fn handle(&mut self, command: Command) -> Result<Outcome<'_>> {
        let state = mem::replace(&mut self.state, State::Idle);

        match (state, command) {
            (State::Finished, command) => {
                self.state = State::Finished;
                Err(Error::invalid_input(format!(
                    "{command} is not accepted once the session has finished"
                )))
            }
            (_, Command::Quit) => {
                log::debug!("session finished");
                self.state = State::Finished;
                Ok(Outcome::Finished)
            }
            (State::Idle, Command::Consult(scope)) => {
                self.state = State::Configuring { scope, month: None };
                Ok(Outcome::AwaitingInput)
            }
            (
                State::Configuring {
                    scope: Scope::Month,
                    month: None,
                },
                Command::Month(text),
            ) => {
                let month = calendar::parse_month(&text)?;
                self.state = State::Configuring {
                    scope: Scope::Month,
                    month: Some(month),
                };
                Ok(Outcome::AwaitingInput)
            }
            (
                State::Configuring {
                    scope: Scope::Month,
                    month: Some(month),
                },
                Command::Year(text),
            ) => {
                let year = calendar::parse_year(&text)?;
                let report = self.tabulator().month_report(year, month)?;
                self.state = State::Reporting(report);
                Ok(self.reported())
            }
            (
                State::Configuring {
                    scope: Scope::Year, ..
                },
                Command::Year(text),
            ) => {
                let year = calendar::parse_year(&text)?;
                let report = self.tabulator().year_report(year)?;
                self.state = State::Reporting(report);
                Ok(self.reported())
            }
            (State::Reporting(report), Command::Export(choice)) => self.export(report, &choice),
            (state, command) => {
                let err = Error::invalid_input(format!("{command} is not accepted while {state}"));
                self.state = state;
                Err(err)
            }
        }
    }

    fn tabulator(&self) -> Tabulator<'_, E> {
        Tabulator::new(&self.ephemeris, &self.bodies, self.rounding)
    }

    fn reported(&self) -> Outcome<'_> {
        self.report().map_or(Outcome::AwaitingInput, Outcome::Reported)
    }

    fn export(&mut self, report: Report, choice: &str) -> Result<Outcome<'_>> {
        let choice = choice.trim();
        if choice.is_empty() || choice.eq_ignore_ascii_case("none") {
            log::debug!("export skipped");
            return Ok(Outcome::Skipped);
        }

        let format = match choice.parse::<ExportFormat>() {
            Ok(format) => format,
            Err(err) => {
                self.state = State::Reporting(report);
                return Err(err);
            }
        };

        let path = self.export_path(format);
        match render::export(&report, format, &path) {
            Ok(path) => Ok(Outcome::Exported { format, path }),
            Err(err) => {
                log::warn!("{err}");
                self.state = State::Reporting(report);
                Err(err)
            }
        }
    }

    fn export_path(&self, format: ExportFormat) -> PathBuf {
        let name = format.default_file_name();
        match &self.export_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}
