// crates/ethica-server/src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use tracing::{Level, debug, info};

/// Configuration validation result
#[derive(Debug)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Default for ConfigValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Suppress the stderr thought boxes (ETHICA_DISABLE_THOUGHT_LOGGING)
    pub disable_thought_logging: Option<bool>,
    /// Log level override (ETHICA_LOG_LEVEL)
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        let config = Self {
            disable_thought_logging: parse_bool_env("ETHICA_DISABLE_THOUGHT_LOGGING"),
            log_level: std::env::var("ETHICA_LOG_LEVEL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        };

        if config.disable_thought_logging == Some(true) {
            info!("ETHICA_DISABLE_THOUGHT_LOGGING is set - thought boxes suppressed");
        }
        debug!(?config, "Loaded environment configuration");
        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if let Some(ref level) = self.log_level {
            if parse_level(level).is_none() {
                validation.add_warning(format!(
                    "Unknown ETHICA_LOG_LEVEL '{}'. Valid options: error, warn, info, debug, trace",
                    level
                ));
            }
        }

        if std::env::var("ETHICA_DISABLE_THOUGHT_LOGGING").is_ok()
            && self.disable_thought_logging.is_none()
        {
            validation.add_warning(
                "ETHICA_DISABLE_THOUGHT_LOGGING is not a recognized boolean (use true/false)",
            );
        }

        validation
    }
}

/// Parse a tracing level name, case-insensitive
pub fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

fn parse_bool_env(name: &str) -> Option<bool> {
    parse_bool(&std::env::var(name).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level("warning"), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_validation_default_ok() {
        // No env manipulation: a default config has nothing to warn about
        let validation = EnvConfig::default().validate();
        assert!(validation.is_valid());
        assert_eq!(validation.report(), "Configuration OK");
    }

    #[test]
    fn test_validation_unknown_level_warns() {
        let config = EnvConfig {
            disable_thought_logging: None,
            log_level: Some("loud".to_string()),
        };
        let validation = config.validate();
        assert!(validation.is_valid());
        assert_eq!(validation.warnings.len(), 1);
        assert!(validation.report().contains("ETHICA_LOG_LEVEL"));
    }

    #[test]
    fn test_report_lists_errors_before_warnings() {
        let mut validation = ConfigValidation::new();
        validation.add_warning("w");
        validation.add_error("e");
        assert!(!validation.is_valid());
        assert_eq!(validation.report(), "Errors:\n  - e\nWarnings:\n  - w");
    }
}
