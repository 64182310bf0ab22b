//! Configuration management for fourcalc
//!
//! Every section and field is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Use colors when rendering
    pub colors: bool,

    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: String,

    /// Log file; defaults to `fourcalc.log` in the data directory
    pub file: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors: true,
            tick_rate_ms: 100,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// Falls back to defaults if no config file exists. Environment overrides
    /// are applied on top.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Apply `NO_COLOR`, `FOURCALC_NO_COLOR`, `FOURCALC_TICK_MS`,
    /// `FOURCALC_LOG_FORMAT` and `FOURCALC_LOG_LEVEL`
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var("NO_COLOR").is_ok() || std::env::var("FOURCALC_NO_COLOR").is_ok() {
            self.ui.colors = false;
        }

        if let Some(tick) = std::env::var("FOURCALC_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.tick_rate_ms = tick;
        }

        if let Some(format) = std::env::var("FOURCALC_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.logging.format = format;
        }

        if let Ok(level) = std::env::var("FOURCALC_LOG_LEVEL") {
            self.logging.level = level;
        }

        self
    }

    /// Resolved log file path, with `~` expanded
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(PathBuf::from(shellexpand::tilde(path).to_string())),
            None => Ok(resolve_data_path()?.join("fourcalc.log")),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("FOURCALC_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("fourcalc").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("fourcalc"))
}
