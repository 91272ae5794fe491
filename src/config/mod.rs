// SPDX-License-Identifier: MPL-2.0
//! Launcher configuration read from a `config.toml` file.
//!
//! The file tunes how the panel is presented (language, window theme, toast
//! duration). It never carries the values of the settings form: those live
//! only as long as the screen does, and saving the form does not write here.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and window theme mode
//! - `[notifications]` - Toast auto-dismiss duration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument
//! 3. `SETTINGS_PANEL_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use settings_panel::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("config fell back to defaults: {key}");
//! }
//! println!("{:?}", config.general.language);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "config.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default)]
    pub language: Option<String>,

    /// Window theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Seconds before the "settings saved" toast disappears.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_NOTIFICATION_DURATION_SECS,
        }
    }
}

impl NotificationsConfig {
    /// Returns the toast duration, clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let secs = self
            .duration_secs
            .clamp(MIN_NOTIFICATION_DURATION_SECS, MAX_NOTIFICATION_DURATION_SECS);
        Duration::from_secs(u64::from(secs))
    }
}

fn default_duration_secs() -> u32 {
    DEFAULT_NOTIFICATION_DURATION_SECS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or malformed one yields the defaults and
/// the i18n key of a warning toast.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config ignored");
            (Config::default(), Some(err.i18n_key().to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
