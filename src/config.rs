//! Configuration management
//!
//! Loading, parsing, and validation of the demo configuration file. Every
//! section falls back to its defaults when absent, so a partial file is fine.

use crate::constants::{
    DEFAULT_TOAST_DURATION, MENU_DEFAULT_WIDTH, MENU_MAX_WIDTH, MENU_MIN_WIDTH, TOAST_DURATION_MAX_MS,
    TOAST_MAX_VISIBLE_LIMIT,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub toast: ToastConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Sidebar menu panel width in columns
    pub menu_width: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Icon theme: "Emoji", "Unicode" or "Ascii"
    pub icon_theme: IconTheme,
}

/// Toast configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Auto-dismiss duration in milliseconds used when the caller doesn't
    /// supply one (0 = toasts stay until dismissed)
    pub default_duration_ms: u64,
    /// Maximum number of toasts rendered at once; older ones keep their
    /// timers but are not drawn until space frees up
    pub max_visible: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging for the demo binary
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_width: MENU_DEFAULT_WIDTH,
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_TOAST_DURATION.as_millis() as u64,
            max_visible: 4,
        }
    }
}

/// Validation failures for configuration values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("menu_width must be between {MENU_MIN_WIDTH} and {MENU_MAX_WIDTH} columns, got {0}")]
    MenuWidth(u16),
    #[error("default_duration_ms cannot exceed {TOAST_DURATION_MAX_MS} ({0} given)")]
    ToastDuration(u64),
    #[error("max_visible must be between 1 and {TOAST_MAX_VISIBLE_LIMIT}, got {0}")]
    MaxVisible(usize),
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to the XDG config location
    pub fn save(&self) -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("could not determine config directory")?
            .join("ratakit");
        std::fs::create_dir_all(&dir).with_context(|| format!("creating config directory {}", dir.display()))?;

        let path = dir.join("config.toml");
        let content = toml::to_string_pretty(self).context("serializing configuration")?;
        std::fs::write(&path, content).with_context(|| format!("writing config file {}", path.display()))?;
        Ok(path)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("ratakit.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("ratakit").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.menu_width < MENU_MIN_WIDTH || self.ui.menu_width > MENU_MAX_WIDTH {
            return Err(ConfigError::MenuWidth(self.ui.menu_width));
        }

        if self.toast.default_duration_ms > TOAST_DURATION_MAX_MS {
            return Err(ConfigError::ToastDuration(self.toast.default_duration_ms));
        }

        if self.toast.max_visible == 0 || self.toast.max_visible > TOAST_MAX_VISIBLE_LIMIT {
            return Err(ConfigError::MaxVisible(self.toast.max_visible));
        }

        Ok(())
    }
}
