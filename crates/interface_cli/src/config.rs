//! CLI configuration

use std::path::PathBuf;
use std::str::FromStr;

use core_kernel::{CoreError, Currency};
use serde::Deserialize;

/// Estimator configuration, read from `QUOTE_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// ISO 4217 code premiums are quoted in
    pub currency: String,
    /// JSON rating table replacing the standard tariff
    pub rating_table_path: Option<PathBuf>,
    /// Seed for reproducible uncertainty factors
    pub seed: Option<u64>,
    /// Year vehicle ages are measured against (defaults to the system clock)
    pub current_year: Option<i32>,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            rating_table_path: None,
            seed: None,
            current_year: None,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `QUOTE_*` environment variables
    ///
    /// A malformed variable fails the whole load; nothing falls back to a
    /// default behind the caller's back.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("QUOTE"))
    }

    /// Loads configuration from an environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Parsed currency
    pub fn currency(&self) -> Result<Currency, CoreError> {
        Currency::from_str(&self.currency).map_err(|e| {
            CoreError::configuration(format!("QUOTE_CURRENCY: {}", e))
        })
    }
}
