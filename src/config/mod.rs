// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_playbar::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::platform::Platform;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{DEFAULT_SKIP_INTERVAL_SECS, MAX_SKIP_INTERVAL_SECS, MIN_SKIP_INTERVAL_SECS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPlaybar";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Forces the presentation policy to a specific platform
    /// (`"desktop"`, `"tv"`, `"headset"`). Unset means the compile target
    /// decides.
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub skip_interval_secs: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            platform: None,
            skip_interval_secs: Some(DEFAULT_SKIP_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Resolved platform: the configured override, or the compile target.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
            .as_deref()
            .and_then(Platform::from_name)
            .unwrap_or_else(Platform::current)
    }

    /// Resolved skip interval, clamped to the allowed range.
    #[must_use]
    pub fn skip_interval_secs(&self) -> f64 {
        self.skip_interval_secs
            .unwrap_or(DEFAULT_SKIP_INTERVAL_SECS)
            .clamp(MIN_SKIP_INTERVAL_SECS, MAX_SKIP_INTERVAL_SECS)
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
