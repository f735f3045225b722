// crates/ethica-server/src/error.rs
// Standardized error types for Ethica

use crate::thought::ValidationError;
use thiserror::Error;

/// Main error type for the Ethica library
#[derive(Error, Debug)]
pub enum EthicaError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using EthicaError
pub type Result<T> = std::result::Result<T, EthicaError>;

impl EthicaError {
    /// Convert to user-facing string for MCP tool boundaries
    pub fn to_user_string(&self) -> String {
        match self {
            // Validation messages are already user-facing and asserted on verbatim
            EthicaError::InvalidInput(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<toml::de::Error> for EthicaError {
    fn from(err: toml::de::Error) -> Self {
        EthicaError::Config(err.to_string())
    }
}
