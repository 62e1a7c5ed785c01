//! Configuration management for the contact-forms client.
//!
//! This module handles loading and validating configuration from environment variables,
//! loading a local .env file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// How long the error panel stays visible before auto-dismissing, in seconds.
pub const DEFAULT_ERROR_DISPLAY_SECS: u64 = 5;

/// Configuration for the contact-forms client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact-storage API base URL
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Error panel auto-dismiss delay in seconds (default: 5)
    pub error_display_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_API_BASE_URL`: Base URL for the contact-storage API
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `ERROR_DISPLAY_SECS`: Error panel auto-dismiss delay (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("CONTACT_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("CONTACT_API_BASE_URL".to_string()))?;

        // Validate API URL format
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let error_display_secs =
            Self::parse_env_u64("ERROR_DISPLAY_SECS", DEFAULT_ERROR_DISPLAY_SECS)?;

        if error_display_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ERROR_DISPLAY_SECS".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            request_timeout,
            error_display_secs,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            request_timeout: 10,
            error_display_secs: DEFAULT_ERROR_DISPLAY_SECS,
            log_level: "error".to_string(),
        }
    }
}
