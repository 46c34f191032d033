//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};

const PRODUCTION: &str = "production";

/// Configuration shared as router state
pub type SharedConfig = Arc<Config>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Battery level shown on the mock status bar
    pub battery_percent: u8,

    /// Offset used for the status bar clock and the date pickers
    pub utc_offset: FixedOffset,

    /// Network label shown on the mock status bar
    pub network_label: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LOG_FORMAT"))?,
            None if environment == PRODUCTION => LogFormat::Json,
            None => LogFormat::Pretty,
        };

        let battery_percent: u8 = lookup("BATTERY_PERCENT")
            .unwrap_or_else(|| "68".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BATTERY_PERCENT"))?;
        if battery_percent > 100 {
            return Err(ConfigError::InvalidValue("BATTERY_PERCENT"));
        }

        let offset_hours: i32 = lookup("UTC_OFFSET_HOURS")
            .unwrap_or_else(|| "9".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("UTC_OFFSET_HOURS"))?;
        if !(-12..=14).contains(&offset_hours) {
            return Err(ConfigError::InvalidValue("UTC_OFFSET_HOURS"));
        }
        let utc_offset = FixedOffset::east_opt(offset_hours * 3600)
            .ok_or(ConfigError::InvalidValue("UTC_OFFSET_HOURS"))?;

        let network_label = lookup("NETWORK_LABEL").unwrap_or_else(|| "4G+".to_string());

        Ok(Self {
            host,
            port,
            environment,
            log_format,
            battery_percent,
            utc_offset,
            network_label,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
            battery_percent: 68,
            utc_offset: FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| Utc.fix()),
            network_label: "4G+".to_string(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
