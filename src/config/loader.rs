use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound for `ui.poll_interval_ms`; longer waits make quitting sluggish.
pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/counter-tui/config.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("counter-tui").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_existing(path)
    }

    /// Like [`Config::load_from`], but a missing file is an error.
    ///
    /// Used for paths given explicitly on the command line.
    pub fn load_existing(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `ui.poll_interval_ms` is within `1..=MAX_POLL_INTERVAL_MS`
    /// - `logging.filter` is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let poll = self.ui.poll_interval_ms;
        if poll == 0 || poll > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.poll_interval_ms must be between 1 and {}, got {}",
                    MAX_POLL_INTERVAL_MS, poll
                ),
            });
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.filter must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Renders the configuration as TOML, as `--print-config` shows it.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverflowPolicy;

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str("[counter]\noverflow = \"wrap\"\n").unwrap();
        assert_eq!(config.counter.overflow, OverflowPolicy::Wrap);
        assert_eq!(config.ui.poll_interval_ms, 50);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let mut config = Config::default();
        config.ui.poll_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
