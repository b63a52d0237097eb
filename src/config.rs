use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

/// Main configuration structure for topk
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopkConfig {
    /// Selection defaults
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Number of values to keep when `-k` is not given (default: 10)
    #[serde(default = "default_k")]
    pub k: usize,

    /// Sort the selected values descending before display (default: true)
    #[serde(default = "default_true")]
    pub sorted: bool,
}

/// Display configuration options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Whether to colorize terminal output (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace (default: warn)
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_k() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            sorted: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl TopkConfig {
    /// Load config from custom path or default XDG location
    pub fn load(custom_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let path = if let Some(p) = custom_path {
            p.clone()
        } else {
            match Self::default_config_path() {
                Ok(p) => p,
                Err(_) => return Ok(Self::default()),
            }
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.clone(), e))?;
        config.log_level()?;
        Ok(config)
    }

    /// Get default config path: ~/.config/topk/config.toml
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

        Ok(config_dir.join("topk").join("config.toml"))
    }

    /// Parse the configured log level.
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        match self.logging.level.to_ascii_lowercase().as_str() {
            "error" => Ok(Level::ERROR),
            "warn" => Ok(Level::WARN),
            "info" => Ok(Level::INFO),
            "debug" => Ok(Level::DEBUG),
            "trace" => Ok(Level::TRACE),
            _ => Err(ConfigError::InvalidLogLevel(self.logging.level.clone())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config at {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config at {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Invalid log level: {0}. Must be error, warn, info, debug, or trace")]
    InvalidLogLevel(String),
}
