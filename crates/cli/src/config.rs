//! CLI configuration.
//!
//! Loaded from the environment (and a `.env` file if present):
//!
//! - `PUGIL_DATA_DIR` - local data directory (default `.pugil`)
//! - `PUGIL_LOG_FORMAT` - `pretty` (default) or `json`
//! - `PUGIL_USER_NAME`, `PUGIL_USER_USERNAME`, `PUGIL_USER_EMAIL` - the
//!   signed-in profile; nobody is signed in when all three are unset
//! - `SENTRY_DSN`, `SENTRY_ENVIRONMENT` - optional error tracking

use std::path::PathBuf;

use pugil_core::{Email, Identity};
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".pugil";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
    /// Profile the admin gate and checkout see.
    pub identity: Identity,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_env_or_default(&lookup, "PUGIL_DATA_DIR", DEFAULT_DATA_DIR));

        let log_format = match get_env_or_default(&lookup, "PUGIL_LOG_FORMAT", "pretty")
            .to_ascii_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "PUGIL_LOG_FORMAT".to_string(),
                    format!("expected `pretty` or `json`, got `{other}`"),
                ));
            }
        };

        let full_name = get_optional_env(&lookup, "PUGIL_USER_NAME");
        let username = get_optional_env(&lookup, "PUGIL_USER_USERNAME");
        let primary_email = get_optional_env(&lookup, "PUGIL_USER_EMAIL")
            .map(|email| Email::parse(&email))
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("PUGIL_USER_EMAIL".to_string(), e.to_string()))?;

        let identity = if full_name.is_none() && username.is_none() && primary_email.is_none() {
            Identity::anonymous()
        } else {
            Identity::signed_in(full_name, username, primary_email)
        };

        Ok(Self {
            data_dir,
            log_format,
            identity,
            sentry_dsn: get_optional_env(&lookup, "SENTRY_DSN"),
            sentry_environment: get_optional_env(&lookup, "SENTRY_ENVIRONMENT"),
        })
    }
}

/// Get an optional variable. Blank values count as unset.
fn get_optional_env(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a variable with a default value.
fn get_env_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}
