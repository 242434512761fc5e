//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Settings come from an optional TOML
//! file, can be overridden by `EMPSTATS_*` environment variables, and finally
//! by command-line flags.
//!
//! # Example
//!
//! ```no_run
//! use empstats::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("empstats.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;
use url::Url;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Public sample deployment of the employees API.
pub const DEFAULT_BASE_URL: &str = "http://dummy.restapiexample.com/api/v1";

/// Environment variable overriding [`ApiConfig::base_url`].
pub const BASE_URL_ENV: &str = "EMPSTATS_BASE_URL";

/// Environment variable overriding [`LoggingConfig::level`].
pub const LOG_LEVEL_ENV: &str = "EMPSTATS_LOG_LEVEL";

/// Employees API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Root URL; the client requests `{base_url}/employees`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Employees API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, fall back to defaults otherwise, then apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is invalid or an override fails
    /// validation.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.with_env_overrides()
    }

    /// Apply `EMPSTATS_BASE_URL` and `EMPSTATS_LOG_LEVEL` when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the overridden configuration is invalid.
    pub fn with_env_overrides(self) -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).ok();
        let log_level = std::env::var(LOG_LEVEL_ENV).ok();
        self.with_overrides(base_url.as_deref(), log_level.as_deref())
    }

    /// Apply explicit overrides (e.g. from command-line flags).
    ///
    /// # Errors
    ///
    /// Returns an error if the overridden configuration is invalid.
    pub fn with_overrides(
        mut self,
        base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self> {
        if let Some(url) = base_url {
            self.api.base_url = url.to_string();
        }
        if let Some(level) = log_level {
            self.logging.level = level.to_string();
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be 'pretty' or 'json'".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
