//! Configuration management for `SkyGlance`
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. Every setting
//! has a default, so running without a config file talks to the public
//! Open-Meteo endpoints.

use crate::SkyglanceError;
use anyhow::{Context, Result};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkyglanceConfig {
    /// Endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// How "now" is computed
    #[serde(default)]
    pub clock: ClockConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Geocoding and forecast endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the geocoding API (without `/search`)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL for the forecast API (without `/forecast`)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// IANA time zone sent with forecast requests
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Number of geocoding candidates requested
    #[serde(default = "default_result_count")]
    pub result_count: u32,
    /// Language of geocoding results
    #[serde(default = "default_language")]
    pub language: String,
    /// Request timeout in seconds. Unset means the HTTP client's default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Compute "now" in `api.timezone` instead of the machine's local zone
    #[serde(default)]
    pub use_forecast_timezone: bool,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

fn default_result_count() -> u32 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    format!("SkyGlance/{}", crate::VERSION)
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timezone: default_timezone(),
            result_count: default_result_count(),
            language: default_language(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SkyglanceConfig {
    /// Load configuration from `config_path`, or the default file location
    /// when `None`, layered under environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);

        if let Some(config_file) = config_file.filter(|p| p.exists()) {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. SKYGLANCE_API__TIMEZONE=Europe/Berlin
        builder = builder.add_source(
            Environment::with_prefix("SKYGLANCE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SkyglanceConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skyglance").join("config.toml"))
    }

    /// Replace empty strings with their defaults
    pub fn apply_defaults(&mut self) {
        if self.api.geocoding_base_url.is_empty() {
            self.api.geocoding_base_url = default_geocoding_base_url();
        }
        if self.api.forecast_base_url.is_empty() {
            self.api.forecast_base_url = default_forecast_base_url();
        }
        if self.api.timezone.is_empty() {
            self.api.timezone = default_timezone();
        }
        if self.api.language.is_empty() {
            self.api.language = default_language();
        }
        if self.api.user_agent.is_empty() {
            self.api.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_urls()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_urls(&self) -> Result<()> {
        for (name, url) in [
            ("geocoding", &self.api.geocoding_base_url),
            ("forecast", &self.api.forecast_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SkyglanceError::config(format!(
                    "The {name} base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=100).contains(&self.api.result_count) {
            return Err(
                SkyglanceError::config("Geocoding result count must be between 1 and 100").into(),
            );
        }

        if let Some(timeout) = self.api.timeout_seconds {
            if timeout == 0 || timeout > 300 {
                return Err(SkyglanceError::config(
                    "Request timeout must be between 1 and 300 seconds",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        self.forecast_timezone()?;

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SkyglanceError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SkyglanceError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Parsed forecast time zone
    pub fn forecast_timezone(&self) -> crate::Result<Tz> {
        self.api.timezone.parse::<Tz>().map_err(|_| {
            SkyglanceError::config(format!("Unknown time zone '{}'", self.api.timezone))
        })
    }
}
