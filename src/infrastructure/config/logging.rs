//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

const FORMAT_PRETTY: &str = "pretty";
const FORMAT_JSON: &str = "json";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    FORMAT_PRETTY.into()
}

impl LoggingConfig {
    /// Whether `format` names a supported output format.
    #[must_use]
    pub fn has_known_format(&self) -> bool {
        matches!(self.format.as_str(), FORMAT_PRETTY | FORMAT_JSON)
    }

    /// Raise the level for `-v` (debug) and `-vv` (trace).
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.level = "debug".into(),
            _ => self.level = "trace".into(),
        }
        self
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so that command output on stdout stays parseable.
    /// Calling this more than once keeps the first subscriber.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            FORMAT_JSON => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };

        if result.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_warn_and_pretty() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "pretty");
        assert!(config.has_known_format());
    }

    #[test]
    fn unknown_format_is_flagged() {
        let config = LoggingConfig {
            level: "debug".into(),
            format: "xml".into(),
        };
        assert!(!config.has_known_format());
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(LoggingConfig::default().with_verbosity(0).level, "warn");
        assert_eq!(LoggingConfig::default().with_verbosity(1).level, "debug");
        assert_eq!(LoggingConfig::default().with_verbosity(3).level, "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let config = LoggingConfig::default();
        config.init();
        config.init();
    }
}
