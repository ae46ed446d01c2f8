use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::split_controller::SplitConfig;
use crate::spring::Spring;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 860.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub split: SplitConfig,
    /// Panels taller than this show their detail rows
    pub detail_threshold: f32,
    pub window: WindowSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split: SplitConfig::default(),
            detail_threshold: 200.0,
            window: WindowSettings::default(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/snap-split/config.yaml)
    pub fn config_path() -> Option<PathBuf> {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path.push("snap-split");
            path.push("config.yaml");
            Some(path)
        } else {
            None
        }
    }

    /// Load config from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from `path`, falling back to defaults if it is missing or broken
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("{}", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or_else(|| "Could not determine config path".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, yaml).map_err(|e| format!("Failed to write config file: {}", e))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Create an example config file
    pub fn create_example() -> Result<(), String> {
        let example = Config {
            split: SplitConfig {
                min_height: 120.0,
                snap_threshold: 160.0,
                handle_gap: 30.0,
                initial_top_height: 400.0,
                spring: Spring {
                    response: 0.45,
                    damping_fraction: 0.9,
                    duration: 0.4,
                },
            },
            detail_threshold: 220.0,
            window: WindowSettings::default(),
        };

        example.save()
    }
}
