// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Only preferences live here (scale bounds, gesture sensitivities, flip
//! duration). Viewer state such as the current page is never persisted.
//!
//! # Examples
//!
//! ```no_run
//! use menu_flipbook::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.viewer.flip_duration_ms = 900;
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MenuFlipbook";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Raw `[viewer]` table as written by the user. Values are normalized when
/// converted into [`crate::ui::viewer::Settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub initial_scale: f32,
    pub pinch_sensitivity: f32,
    pub wheel_sensitivity: f32,
    pub flip_duration_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            initial_scale: DEFAULT_SCALE,
            pinch_sensitivity: DEFAULT_PINCH_SENSITIVITY,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            flip_duration_ms: DEFAULT_FLIP_DURATION_MS,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparsable content falls back to defaults; only I/O
/// failures are returned as errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!("Ignoring invalid config {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
