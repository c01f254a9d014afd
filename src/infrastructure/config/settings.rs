//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; a missing file yields the defaults.
//!
//! # Example
//!
//! ```no_run
//! use bolao::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::logging::LoggingConfig;
use super::odds::OddsConfig;
use crate::error::{ConfigError, Result};

/// Default config file looked up when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub odds: OddsConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidValue` when a value is out of range.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read, plus any
    /// error from [`Config::parse_toml`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A file that exists but cannot be parsed is still an error.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for existing files.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !self.logging.has_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        if let Some(min) = self.odds.min_multiplier {
            if min < Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "min_multiplier",
                    reason: "must be 0 or greater".to_string(),
                }
                .into());
            }
        }
        if let Some(max) = self.odds.max_multiplier {
            if max <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "max_multiplier",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }
        if let (Some(min), Some(max)) = (self.odds.min_multiplier, self.odds.max_multiplier) {
            if min > max {
                return Err(ConfigError::InvalidValue {
                    field: "min_multiplier",
                    reason: "must be <= max_multiplier".to_string(),
                }
                .into());
            }
        }
        let pct = self.odds.return_percentage;
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(ConfigError::InvalidValue {
                field: "return_percentage",
                reason: "must be between 0 and 100".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber based on logging configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
