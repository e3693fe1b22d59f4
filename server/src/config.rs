//! Server configuration module.
//!
//! Parses configuration from environment variables for the Encore server.
//! The resulting [`Config`] is immutable and passed explicitly into the
//! components that need it; nothing reads the environment after startup.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `ENCORE_API_KEY` | Yes | - | Upstream provider API key |
//! | `ENCORE_EVENTS_URL` | Yes | - | Events base URL, without `.json` |
//! | `PORT` | No | 8080 | HTTP server port |
//! | `ENCORE_PAGE_SIZE` | No | 200 | Upstream page-size override |
//! | `ENCORE_UPSTREAM_TIMEOUT_SECS` | No | 10 | Upstream request timeout |

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default HTTP server port.
const DEFAULT_PORT: u16 = 8080;

/// Default page size requested from the upstream search endpoint.
const DEFAULT_PAGE_SIZE: u32 = 200;

/// Default timeout for upstream requests, in seconds.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable has invalid format.
    #[error("invalid format for {var}: {message}")]
    InvalidFormat { var: String, message: String },

    /// A numeric variable failed to parse.
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

/// Server configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream provider API key.
    pub api_key: String,

    /// Upstream events base URL (e.g. `https://provider.example/discovery/v2/events`).
    pub events_url: String,

    /// HTTP server port.
    pub port: u16,

    /// Page size requested from the upstream search endpoint.
    pub page_size: u32,

    /// Timeout applied to every upstream request.
    pub upstream_timeout: Duration,
}

impl Config {
    /// Parse configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a
    /// numeric variable does not parse.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use encore_server::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load config");
    /// println!("Server will listen on port {}", config.port);
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = require_env("ENCORE_API_KEY")?;
        let events_url = require_env("ENCORE_EVENTS_URL")?
            .trim_end_matches('/')
            .to_string();
        let port = parse_number("PORT", DEFAULT_PORT)?;
        let page_size = parse_number("ENCORE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let timeout_secs =
            parse_number("ENCORE_UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        Ok(Self {
            api_key,
            events_url,
            port,
            page_size,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Read a required environment variable, rejecting empty values.
fn require_env(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Parse an optional numeric environment variable, falling back to a default.
fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(value.parse()?),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidFormat {
            var: name.to_string(),
            message: "contains invalid unicode".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to temporarily set environment variables for testing.
    struct EnvGuard {
        vars: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            let old_value = env::var(key).ok();
            self.vars.push((key.to_string(), old_value));
            env::set_var(key, value);
        }

        fn remove(&mut self, key: &str) {
            let old_value = env::var(key).ok();
            self.vars.push((key.to_string(), old_value));
            env::remove_var(key);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.vars {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    fn set_required(guard: &mut EnvGuard) {
        guard.set("ENCORE_API_KEY", "test-key");
        guard.set("ENCORE_EVENTS_URL", "https://api.example/discovery/v2/events");
    }

    #[test]
    #[serial]
    fn config_with_defaults() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.remove("PORT");
        guard.remove("ENCORE_PAGE_SIZE");
        guard.remove("ENCORE_UPSTREAM_TIMEOUT_SECS");

        let config = Config::from_env().expect("should parse config");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.events_url, "https://api.example/discovery/v2/events");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(
            config.upstream_timeout,
            Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS)
        );
    }

    #[test]
    #[serial]
    fn config_with_overrides() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("PORT", "9090");
        guard.set("ENCORE_PAGE_SIZE", "50");
        guard.set("ENCORE_UPSTREAM_TIMEOUT_SECS", "3");

        let config = Config::from_env().expect("should parse config");
        assert_eq!(config.port, 9090);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    #[serial]
    fn config_trims_trailing_slash_from_events_url() {
        let mut guard = EnvGuard::new();
        guard.set("ENCORE_API_KEY", "test-key");
        guard.set("ENCORE_EVENTS_URL", "https://api.example/events/");
        guard.remove("PORT");

        let config = Config::from_env().expect("should parse config");
        assert_eq!(config.events_url, "https://api.example/events");
    }

    #[test]
    #[serial]
    fn config_missing_api_key() {
        let mut guard = EnvGuard::new();
        guard.remove("ENCORE_API_KEY");
        guard.set("ENCORE_EVENTS_URL", "https://api.example/events");

        let result = Config::from_env();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "ENCORE_API_KEY"));
    }

    #[test]
    #[serial]
    fn config_missing_events_url() {
        let mut guard = EnvGuard::new();
        guard.set("ENCORE_API_KEY", "test-key");
        guard.remove("ENCORE_EVENTS_URL");

        let result = Config::from_env();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "ENCORE_EVENTS_URL"));
    }

    #[test]
    #[serial]
    fn config_rejects_empty_api_key() {
        let mut guard = EnvGuard::new();
        guard.set("ENCORE_API_KEY", "   ");
        guard.set("ENCORE_EVENTS_URL", "https://api.example/events");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(ref v)) if v == "ENCORE_API_KEY"
        ));
    }

    #[test]
    #[serial]
    fn config_rejects_invalid_port() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("PORT", "not-a-number");

        let result = Config::from_env();
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidNumber(_)));
    }

    #[test]
    #[serial]
    fn config_rejects_out_of_range_port() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.set("PORT", "99999");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn config_rejects_invalid_page_size() {
        let mut guard = EnvGuard::new();
        set_required(&mut guard);
        guard.remove("PORT");
        guard.set("ENCORE_PAGE_SIZE", "lots");

        assert!(Config::from_env().is_err());
    }
}
