//! Configuration types.
//!
//! This module defines the client configuration and the logging options shared
//! with the command-line interface.

use clap::ValueEnum;

use crate::config::constants::{BASE_URL, DEFAULT_STRICTNESS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Reputation client configuration.
///
/// Can be constructed programmatically; the CLI builds one from its arguments.
///
/// # Examples
///
/// ```
/// use url_reputation::ClientConfig;
///
/// let config = ClientConfig {
///     api_key: "my-key".to_string(),
///     strictness: 1,
///     ..Default::default()
/// };
/// assert_eq!(config.base_url, url_reputation::config::BASE_URL);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// IP Quality Score API key
    pub api_key: String,

    /// Scan strictness forwarded verbatim (any integer, no clamping)
    pub strictness: i64,

    /// Service endpoint without a trailing slash
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            strictness: DEFAULT_STRICTNESS,
            base_url: BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the public endpoint.
    pub fn new(api_key: impl Into<String>, strictness: i64) -> Self {
        Self {
            api_key: api_key.into(),
            strictness,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.strictness, 0);
        assert_eq!(config.base_url, BASE_URL);
    }

    #[test]
    fn test_client_config_keeps_out_of_range_strictness() {
        // The service owns strictness semantics; nothing is clamped here
        assert_eq!(ClientConfig::new("key", -9).strictness, -9);
        assert_eq!(ClientConfig::new("key", 9).strictness, 9);
        assert_eq!(ClientConfig::new("key", i64::MAX).strictness, i64::MAX);
    }
}
