//! Configuration management for fightbook.
//!
//! This module provides configuration loading and validation using
//! figment, supporting a TOML config file, environment variables, and
//! defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::snapshot;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config/data directory name.
const DATA_DIR_NAME: &str = "fightbook";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest
/// first):
/// 1. Environment variables (prefixed with `FIGHTBOOK_`)
/// 2. TOML config file at `~/.config/fightbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Roster persistence configuration.
    pub roster: RosterConfig,
}

/// Roster persistence configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Path to the working roster snapshot.
    /// Defaults to `~/.local/share/fightbook/roster.json`.
    pub snapshot_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FIGHTBOOK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.roster.snapshot_path {
            if path.file_name().is_none() {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "snapshot_path must point to a file, got {}",
                        path.display()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Get the working snapshot path, resolving defaults if not set.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.roster
            .snapshot_path
            .clone()
            .unwrap_or_else(snapshot::default_snapshot_path)
    }
}
