//! Settings configuration
//!
//! User-configurable settings for the candidate window helper.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use candwin_core::{LabelTable, Size};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the helper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Label grid settings
    pub layout: LayoutSettings,
    /// Screen bounds
    pub screen: ScreenSettings,
    /// Engine connection settings
    pub transport: TransportSettings,
}

/// Label grid settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Row-major label characters; empty means the built-in layout
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSettings {
    pub width: i32,
    pub height: i32,
}

/// Behavior when the engine closes the connection
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EofPolicy {
    /// Stop with an error so the process exits non-zero
    #[default]
    Exit,
    /// Stop cleanly
    Shutdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportSettings {
    #[serde(default)]
    pub on_eof: EofPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Overlay user values on the defaults. Tables merge key by key; any other
/// value (including the `labels` array) replaces the default outright.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse a user config; sections or keys it leaves out keep their
/// `default.toml` values.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "candwin", "candwin")
}

impl Settings {
    /// `~/.config/candwin` on Linux
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// `config.toml` inside [`Settings::config_dir`]
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load the user's `config.toml`. Without one, the helper runs on the
    /// built-in layout, a 1024x768 screen and the `exit` EOF policy.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_file);
        let content = fs::read_to_string(&config_file)?;
        parse_with_defaults(&content)
    }

    /// Load the file given with `--config`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Load from `path` if given, else from the default location.
    /// A broken file falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let loaded = match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        };
        loaded.unwrap_or_else(|e| {
            warn!("Failed to load config ({:#}), using defaults", e);
            Self::default()
        })
    }

    /// Label table for the configured layout.
    /// An invalid layout falls back to the built-in one.
    pub fn label_table(&self) -> LabelTable {
        if self.layout.labels.is_empty() {
            return LabelTable::default();
        }
        LabelTable::from_strings(&self.layout.labels).unwrap_or_else(|e| {
            warn!("Invalid label layout ({}), using the built-in one", e);
            LabelTable::default()
        })
    }

    pub fn screen_size(&self) -> Size {
        Size::new(self.screen.width, self.screen.height)
    }
}
