//! Layered application configuration.
//!
//! Settings come from an optional `vencfg` file (TOML/JSON, next to the
//! binary or in the working directory) overlaid with `VENCFG__`-prefixed
//! environment variables; nested keys use double underscores
//! (e.g. `VENCFG__LOGGING__LEVEL=debug`).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use vencfg_logger::LevelFilter;

const ENV_PREFIX: &str = "VENCFG";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_CONFIG_NAME: &str = "vencfg";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },

    #[error("invalid log level '{level}'")]
    InvalidLevel { level: String },
}

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub window: WindowConfig,
    /// Directory with catalog asset files overriding the embedded catalog.
    pub catalog_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Loads the layered configuration. A missing config file is fine;
    /// defaults and environment overrides still apply.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file or environment values are
    /// malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = path.map_or_else(
            || File::with_name(DEFAULT_CONFIG_NAME).required(false),
            |p| File::from(p).required(true),
        );

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .convert_case(config::Case::Snake),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Logging knobs forwarded to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: bool,
    pub path: Option<PathBuf>,
    pub level: String,
    pub json: bool,
}

impl LoggingConfig {
    /// Parses the configured level string.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLevel`] for unknown level names.
    pub fn level(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::InvalidLevel { level: self.level.clone() })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console: true, path: None, level: "info".to_owned(), json: false }
    }
}

/// Main window geometry and title.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Vencord Config Generator".to_owned(), width: 1200.0, height: 800.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert!(config.logging.console);
        assert_eq!(config.logging.level().unwrap(), LevelFilter::INFO);
        assert_eq!(config.window.title, "Vencord Config Generator");
    }

    #[test]
    fn bad_level_is_rejected() {
        let logging = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
        assert!(matches!(logging.level(), Err(ConfigError::InvalidLevel { .. })));
    }
}
