//! Configuration management for hdlauncher
//!
//! Handles loading and saving of user configuration: the Dolphin root
//! directory, the game ISO path, and the two texture-pack selections.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dolphin root directory (contains Dolphin.exe and the User tree)
    #[serde(default)]
    pub dolphin_dir: Option<PathBuf>,

    /// Path to the game ISO
    #[serde(default)]
    pub iso_path: Option<PathBuf>,

    /// Selected button-style pack (index into `assets::BUTTON_STYLES`)
    #[serde(default)]
    pub button_style: usize,

    /// Selected gloss adjustment (index into `assets::GLOSS_ADJUSTMENTS`)
    #[serde(default)]
    pub gloss: usize,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("hdlauncher");
            fs::create_dir_all(&app_dir).ok();
            app_dir.join("config.toml")
        } else {
            PathBuf::from("config.toml")
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let path = Self::config_path();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(config) => {
                        log::info!("Loaded configuration from: {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        log::error!("Failed to parse config file: {}", e);
                    }
                },
                Err(e) => {
                    log::error!("Failed to read config file: {}", e);
                }
            }
        }

        log::info!("Using default configuration");
        Self::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path();
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        log::info!("Saved configuration to: {}", path.display());
        Ok(())
    }
}
