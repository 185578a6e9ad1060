//! Ephemgen configuration.
//!
//! Loaded from `~/.ephemgen/config.toml`. A missing file means defaults;
//! a malformed one is an error.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::format::MinuteRounding;
use crate::model::CelestialBody;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHome,

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = core::result::Result<T, ConfigError>;

/// Ephemgen configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Bodies to tabulate, in column order.
    pub bodies: Vec<CelestialBody>,

    /// Observer longitude in degrees east of Greenwich.
    /// Zero tabulates Greenwich sidereal time.
    pub observer_longitude: f64,

    pub minute_rounding: MinuteRounding,

    /// Directory for exports written under their default file name.
    /// The working directory when unset.
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bodies: CelestialBody::ALL.to_vec(),
            observer_longitude: 0.0,
            minute_rounding: MinuteRounding::default(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Load config from `~/.ephemgen/config.toml`.
    pub fn load() -> Result<Self> {
        let path = Self::path().ok_or(ConfigError::NoHome)?;
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// The config file path: `~/.ephemgen/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".ephemgen").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            return Err(ConfigError::Invalid("bodies must not be empty".into()));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.bodies.iter().find(|b| !seen.insert(**b)) {
            return Err(ConfigError::Invalid(format!("{dup} is listed twice in bodies")));
        }

        if !(-180.0..=180.0).contains(&self.observer_longitude) {
            return Err(ConfigError::Invalid(format!(
                "observer-longitude must be within ±180°, got {}",
                self.observer_longitude
            )));
        }

        Ok(())
    }

    /// Where an export with `file_name` goes when no explicit path is given.
    pub fn export_path(&self, file_name: &str) -> PathBuf {
        match &self.export_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bodies.len(), 10);
        assert_eq!(config.minute_rounding, MinuteRounding::Carry);
    }

    #[test]
    fn reads_all_keys() {
        let (_dir, path) = write_config(
            r#"
bodies = ["moon", "sun"]
observer-longitude = -71.06
minute-rounding = "legacy"
export-dir = "/tmp/tables"
"#,
        );
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.bodies, [CelestialBody::Moon, CelestialBody::Sun]);
        assert!((config.observer_longitude + 71.06).abs() < 1e-12);
        assert_eq!(config.minute_rounding, MinuteRounding::Legacy);
        assert_eq!(
            config.export_path("ephemeris.csv"),
            PathBuf::from("/tmp/tables/ephemeris.csv")
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("observer-longitude = 2.35\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.bodies, CelestialBody::ALL);
        assert_eq!(config.export_path("ephemeris.json"), PathBuf::from("ephemeris.json"));
    }

    #[test]
    fn rejects_unknown_body() {
        let (_dir, path) = write_config("bodies = [\"vulcan\"]\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_unknown_key() {
        let (_dir, path) = write_config("default-identity = \"someone\"\n");
        assert!(matches!(
            Config::load_from(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn rejects_duplicate_bodies() {
        let (_dir, path) = write_config("bodies = [\"mars\", \"venus\", \"mars\"]\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("Mars"));
    }

    #[test]
    fn rejects_empty_bodies() {
        let (_dir, path) = write_config("bodies = []\n");
        assert!(matches!(
            Config::load_from(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        let (_dir, path) = write_config("observer-longitude = 200.0\n");
        assert!(matches!(
            Config::load_from(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }
}
