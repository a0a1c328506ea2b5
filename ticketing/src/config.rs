//! Configuration management for the ticketing binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default tracing filter when neither `RUST_LOG` nor `TICKETING_LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info,cinema_tickets=debug";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Account used when none is given on the command line
    pub default_account_id: i64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive (trace, debug, info, warn, error, or per-target)
    pub level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            logging: LoggingConfig {
                level: lookup("TICKETING_LOG_LEVEL")
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            default_account_id: lookup("TICKETING_ACCOUNT_ID")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.default_account_id, 1);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TICKETING_LOG_LEVEL", "warn"),
            ("TICKETING_ACCOUNT_ID", "42"),
        ]));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.default_account_id, 42);
    }

    #[test]
    fn test_unparsable_account_falls_back() {
        let config = Config::from_lookup(lookup(&[("TICKETING_ACCOUNT_ID", "abc")]));
        assert_eq!(config.default_account_id, 1);
    }
}
