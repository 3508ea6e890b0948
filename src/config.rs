//! Demo configuration, read from the environment (and `.env` when present).

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const LOG_ENV: &str = "STOREFRONT_LOG";
pub const SUMMARY_FORMAT_ENV: &str = "STOREFRONT_SUMMARY_FORMAT";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for SummaryFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidSummaryFormat(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub summary_format: SummaryFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { log_filter: "info".to_string(), summary_format: SummaryFormat::Text }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown summary format '{0}', expected 'text' or 'json'")]
    InvalidSummaryFormat(String),
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_filter = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()).unwrap_or(defaults.log_filter);
        let summary_format = match lookup(SUMMARY_FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => defaults.summary_format,
        };
        Ok(Self { log_filter, summary_format })
    }
}
