// crates/ethica-server/src/config/mod.rs
// Configuration: env vars and ~/.ethica/config.toml, merged into Settings

pub mod env;
pub mod file;

pub use env::{ConfigValidation, EnvConfig, parse_level};
pub use file::EthicaConfig;

use std::path::PathBuf;
use tracing::Level;

/// Directory holding config.toml and .env
pub fn ethica_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ethica")
}

/// Effective runtime settings. Environment overrides the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Render accepted thoughts to stderr
    pub thought_logging: bool,
    /// Max tracing level
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thought_logging: true,
            // Quiet for MCP stdio
            log_level: Level::WARN,
        }
    }
}

impl Settings {
    pub fn resolve(env: &EnvConfig, file: &EthicaConfig) -> Self {
        let defaults = Self::default();

        let thought_logging = env
            .disable_thought_logging
            .map(|disabled| !disabled)
            .or(file.display.thought_logging)
            .unwrap_or(defaults.thought_logging);

        let log_level = env
            .log_level
            .as_deref()
            .and_then(parse_level)
            .or_else(|| file.logging.level.as_deref().and_then(parse_level))
            .unwrap_or(defaults.log_level);

        Self {
            thought_logging,
            log_level,
        }
    }

    /// Load env + file configuration (call once at startup)
    pub fn load() -> Self {
        Self::resolve(&EnvConfig::load(), &EthicaConfig::load())
    }
}
