use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::theme::AppTheme;

pub const CONFIG_VERSION: u64 = 1;

/// Largest calendar window accepted from the config file, about ten years.
pub const MAX_CALENDAR_WINDOW_DAYS: i64 = 3650;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config version {0}")]
    Version(u64),
    #[error("calendar_window_days must be between 1 and {max}, got {0}", max = MAX_CALENDAR_WINDOW_DAYS)]
    CalendarWindow(i64),
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("axer")
}

fn default_version() -> u64 {
    CONFIG_VERSION
}

fn default_calendar_window_days() -> i64 {
    30
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AxerConfig {
    #[serde(default = "default_version")]
    pub version: u64,
    #[serde(default)]
    pub theme: AppTheme,
    #[serde(default)]
    pub debug_logging: bool,
    /// Days before and after today that the calendar view loads.
    #[serde(default = "default_calendar_window_days")]
    pub calendar_window_days: i64,
}

impl Default for AxerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            theme: AppTheme::default(),
            debug_logging: false,
            calendar_window_days: default_calendar_window_days(),
        }
    }
}

impl AxerConfig {
    pub fn default_path() -> PathBuf {
        default_config_dir().join("config.json")
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::Version(config.version));
        }
        if !(1..=MAX_CALENDAR_WINDOW_DAYS).contains(&config.calendar_window_days) {
            return Err(ConfigError::CalendarWindow(config.calendar_window_days));
        }
        Ok(config)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config, {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
