//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::weight::{is_valid_date_format, DEFAULT_DATE_FORMAT, DEFAULT_STORAGE_KEY};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the key-value storage lives
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default = "default_key")]
    pub key: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("weight-log").to_string_lossy().to_string())
        .unwrap_or_else(|| "./weight_log_data".to_string())
}

fn default_file_name() -> String {
    "storage.json".to_string()
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl StorageConfig {
    /// Storage rooted at `data_dir`, other settings default
    pub fn new(data_dir: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the storage document
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.file_name)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
            key: default_key(),
        }
    }
}

/// How entries are captured and shown
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// strftime pattern used to stamp new entries
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Label appended to weights in the history list
    #[serde(default = "default_unit_label")]
    pub unit_label: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_unit_label() -> String {
    "kg".to_string()
}

impl DisplayConfig {
    /// Replace a date format that cannot render a date with the default
    fn sanitize(&mut self) {
        if !is_valid_date_format(&self.date_format) {
            tracing::warn!(
                "Invalid date_format {:?}, using {:?}",
                self.date_format,
                DEFAULT_DATE_FORMAT
            );
            self.date_format = default_date_format();
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            unit_label: default_unit_label(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.display.sanitize();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("weight-log").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("WEIGHT_LOG_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(date_format) = var("WEIGHT_LOG_DATE_FORMAT") {
            self.display.date_format = date_format;
            self.display.sanitize();
        }

        if let Some(level) = var("WEIGHT_LOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WEIGHT_LOG_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Weight Log Configuration
#
# Environment variables override these settings:
# - WEIGHT_LOG_DATA_DIR
# - WEIGHT_LOG_DATE_FORMAT
# - WEIGHT_LOG_LOG_LEVEL
# - WEIGHT_LOG_LOG_FORMAT

[storage]
# Directory holding the storage file
data_dir = "~/.local/share/weight-log"

# Name of the storage file inside data_dir
file_name = "storage.json"

# Key the weight history is stored under
key = "weightEntries"

[display]
# strftime pattern used to date new entries
date_format = "%-m/%-d/%Y"

# Unit shown after each weight in the history
unit_label = "kg"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
