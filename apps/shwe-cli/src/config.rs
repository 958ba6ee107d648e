//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Nothing here changes how the engine computes; it only picks the
//! values the CLI passes in explicitly.

use serde::{Deserialize, Serialize};
use std::env;

use shwe_core::money::DEFAULT_CURRENCY_SUFFIX;
use shwe_core::GramStandard;

/// Default gram standard for commands that take `--standard`.
pub const ENV_STANDARD: &str = "SHWE_STANDARD";

/// Log filter used when `RUST_LOG` is unset.
pub const ENV_LOG: &str = "SHWE_LOG";

/// Suffix for formatted amounts.
pub const ENV_CURRENCY_SUFFIX: &str = "SHWE_CURRENCY_SUFFIX";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Standard used when a command is not given `--standard`
    pub standard: GramStandard,

    /// Fallback tracing filter
    pub log_filter: Option<String>,

    /// Suffix for formatted amounts, e.g. "Ks"
    pub currency_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            standard: GramStandard::default(),
            log_filter: None,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let standard = match non_empty(lookup(ENV_STANDARD)) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_STANDARD.to_string(),
                    value,
                })?,
            None => defaults.standard,
        };

        Ok(AppConfig {
            standard,
            log_filter: non_empty(lookup(ENV_LOG)),
            currency_suffix: lookup(ENV_CURRENCY_SUFFIX)
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.currency_suffix),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
