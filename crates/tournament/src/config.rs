//! League configuration read from `league.toml`

use league_core::{CriteriaChain, Criterion, TournamentState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default name of the configuration file
pub const CONFIG_FILE: &str = "league.toml";

/// Environment variable overriding the data file location
pub const DATA_ENV: &str = "LEAGUE_DATA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings for the command line front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Where the league state is stored
    pub data_path: PathBuf,
    /// Criteria chain for a new or reset league
    pub default_criteria: Vec<Criterion>,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("league.json"),
            default_criteria: CriteriaChain::default().iter().collect(),
            log_filter: "warn".to_string(),
        }
    }
}

impl LeagueConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from the environment
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(DATA_ENV) {
            if !path.trim().is_empty() {
                self.data_path = PathBuf::from(path);
            }
        }
    }

    /// Configured chain with repeats removed
    pub fn criteria_chain(&self) -> CriteriaChain {
        CriteriaChain::from_criteria(self.default_criteria.iter().copied())
    }

    /// The state a fresh league starts from
    pub fn initial_state(&self) -> TournamentState {
        TournamentState::with_criteria(self.criteria_chain())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
