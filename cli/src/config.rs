use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const MIN_BUILDINGS: usize = 2;
pub const MAX_BUILDINGS: usize = 26;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Runtime settings. File values are the base layer, command-line flags
/// override them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// JSON edge list to load. Takes precedence over `random`.
    pub edges_file: Option<PathBuf>,
    /// Generate a random campus instead of the built-in sample.
    pub random: bool,
    /// Building count for the random campus.
    pub buildings: usize,
    pub seed: u64,
    /// Expansion cap for `paths` and `longest` when the command gives none.
    /// 0 = unbounded.
    pub path_cap: i64,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            edges_file: None,
            random: false,
            buildings: 20,
            seed: 42,
            path_cap: 10_000,
            color: true,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file, or defaults when no file is given.
    /// Bounds are not checked here; call [`Settings::validate`] once every
    /// override has been applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match path {
            None => Self::default(),
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&text).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
        };
        Ok(settings)
    }

    fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BUILDINGS..=MAX_BUILDINGS).contains(&self.buildings) {
            return Err(ConfigError::OutOfRange {
                field: "buildings",
                value: self.buildings as i64,
                min: MIN_BUILDINGS as i64,
                max: MAX_BUILDINGS as i64,
            });
        }
        if self.path_cap < 0 {
            return Err(ConfigError::OutOfRange {
                field: "path_cap",
                value: self.path_cap,
                min: 0,
                max: i64::MAX,
            });
        }
        Ok(())
    }
}
