// crates/ethica-server/src/config/file.rs
// File-based configuration from ~/.ethica/config.toml

use crate::error::{EthicaError, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct EthicaConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Console rendering section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Render each accepted thought as a box on stderr
    pub thought_logging: Option<bool>,
}

/// Logging section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    /// error/warn/info/debug/trace
    pub level: Option<String>,
}

impl EthicaConfig {
    /// Load config from ~/.ethica/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config from file");
                config
            }
            Err(EthicaError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load config file");
                Self::default()
            }
        }
    }

    /// Read and parse a config file, surfacing I/O and parse errors
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        super::ethica_dir().join("config.toml")
    }
}
