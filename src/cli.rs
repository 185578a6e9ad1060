//! CLI interface for Ephemgen.
//!
//! Two ways in:
//!
//! - `ephemgen month|year ...`: one report, printed and optionally exported.
//! - `ephemgen interactive` (the default): the prompt-driven session.
//!
//! Global flags override the config file for this run only.

mod interactive;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::ephemeris::MeanElements;
use crate::error::Result;
use crate::format::MinuteRounding;
use crate::model::{CelestialBody, Report};
use crate::render::{self, ExportFormat};
use crate::session::Session;
use crate::tabulate::Tabulator;

/// Ephemgen: monthly and yearly ephemeris tables.
#[derive(Debug, Parser)]
#[command(name = "ephemgen", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file to use instead of `~/.ephemgen/config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output. Repeat for debug detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Bodies to tabulate, in column order. Can be specified multiple times.
    #[arg(long = "body", value_enum, global = true)]
    bodies: Vec<BodyArg>,

    /// Observer longitude in degrees east, for local sidereal time.
    #[arg(long, global = true, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Keep `60` in the minutes field instead of carrying into the degree.
    #[arg(long, global = true)]
    legacy_minutes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const USAGE_HELP: &str = r"Examples:
  ephemgen month 2025 3
  ephemgen month 2025 3 --body sun --body moon --export csv
  ephemgen year 2024 --export json --out tables/2024.json --quiet
  ephemgen                      # interactive session";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tabulate one month.
    Month {
        /// Year, e.g. 2025.
        year: i16,
        /// Month number, 1-12.
        month: i8,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Tabulate a whole year, month by month.
    Year {
        /// Year, e.g. 2025.
        year: i16,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Prompt for consultations until told to stop.
    Interactive,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Also write the report in this format.
    #[arg(long, value_enum)]
    export: Option<FormatArg>,

    /// Export destination. Defaults to `ephemeris.<format>` in the export directory.
    #[arg(long, requires = "export")]
    out: Option<PathBuf>,

    /// Skip the terminal table.
    #[arg(long)]
    quiet: bool,
}

/// CLI-facing export format, mapped to the domain `ExportFormat`.
#[derive(Debug, Clone, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl FormatArg {
    fn to_domain(&self) -> ExportFormat {
        match self {
            Self::Json => ExportFormat::Json,
            Self::Csv => ExportFormat::Csv,
        }
    }
}

/// CLI-facing body name, mapped to the domain `CelestialBody`.
#[derive(Debug, Clone, ValueEnum)]
pub enum BodyArg {
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

impl BodyArg {
    fn to_domain(&self) -> CelestialBody {
        match self {
            Self::Sun => CelestialBody::Sun,
            Self::Moon => CelestialBody::Moon,
            Self::Mercury => CelestialBody::Mercury,
            Self::Venus => CelestialBody::Venus,
            Self::Mars => CelestialBody::Mars,
            Self::Jupiter => CelestialBody::Jupiter,
            Self::Saturn => CelestialBody::Saturn,
            Self::Uranus => CelestialBody::Uranus,
            Self::Neptune => CelestialBody::Neptune,
            Self::Pluto => CelestialBody::Pluto,
        }
    }
}

impl Cli {
    /// Loads the config file and applies the command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if !self.bodies.is_empty() {
            config.bodies = self.bodies.iter().map(BodyArg::to_domain).collect();
        }
        if let Some(longitude) = self.longitude {
            config.observer_longitude = longitude;
        }
        if self.legacy_minutes {
            config.minute_rounding = MinuteRounding::Legacy;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let ephemeris = MeanElements::new(config.observer_longitude);
    log::debug!("tabulating {} bodies", config.bodies.len());

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Month {
            year,
            month,
            output,
        } => {
            let tab = Tabulator::new(&ephemeris, &config.bodies, config.minute_rounding);
            let report = tab.month_report(year, month)?;
            cmd_output(&config, &report, &output)
        }
        Command::Year { year, output } => {
            let tab = Tabulator::new(&ephemeris, &config.bodies, config.minute_rounding);
            let report = tab.year_report(year)?;
            cmd_output(&config, &report, &output)
        }
        Command::Interactive => {
            let mut session = Session::from_config(ephemeris, &config);
            let stdin = io::stdin();
            let stdout = io::stdout();
            interactive::drive(&mut session, stdin.lock(), &mut stdout.lock())
        }
    }
}

fn cmd_output(config: &Config, report: &Report, output: &OutputArgs) -> Result<()> {
    if !output.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        render::write_table(report, &mut out)?;
        out.flush()?;
    }

    if let Some(format) = &output.export {
        let format = format.to_domain();
        let path = output
            .out
            .clone()
            .unwrap_or_else(|| config.export_path(format.default_file_name()));
        let path = render::export(report, format, &path)?;
        // Keep stdout clean for the table.
        eprintln!("{format} export complete: {}", path.display());
    }

    Ok(())
}
