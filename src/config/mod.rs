// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! All fields are optional in the file; absent or unparsable values fall back
//! to the constants in [`defaults`].

pub mod defaults;

use crate::error::Result;
use crate::media::sheet::Arrangement;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "BadgeStudio";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub zoom_in_factor: Option<f32>,
    #[serde(default)]
    pub zoom_out_factor: Option<f32>,
    #[serde(default)]
    pub diameter_mm: Option<f32>,
    #[serde(default)]
    pub dpi: Option<u32>,
    #[serde(default)]
    pub arrangement: Option<Arrangement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_in_factor: Some(defaults::DEFAULT_ZOOM_IN_FACTOR),
            zoom_out_factor: Some(defaults::DEFAULT_ZOOM_OUT_FACTOR),
            diameter_mm: Some(defaults::DEFAULT_DIAMETER_MM),
            dpi: Some(defaults::DEFAULT_DPI),
            arrangement: Some(Arrangement::Grid),
        }
    }
}

impl Config {
    /// Scroll-up wheel multiplier, sanitized to a value that zooms in.
    pub fn zoom_in_factor(&self) -> f32 {
        match self.zoom_in_factor {
            Some(v) if v.is_finite() && v > 1.0 => v,
            _ => defaults::DEFAULT_ZOOM_IN_FACTOR,
        }
    }

    /// Scroll-down wheel multiplier, sanitized to a value that zooms out.
    pub fn zoom_out_factor(&self) -> f32 {
        match self.zoom_out_factor {
            Some(v) if v.is_finite() && v > 0.0 && v < 1.0 => v,
            _ => defaults::DEFAULT_ZOOM_OUT_FACTOR,
        }
    }

    /// Badge diameter in millimeters, clamped to the supported range.
    pub fn diameter_mm(&self) -> f32 {
        self.diameter_mm
            .filter(|v| v.is_finite())
            .unwrap_or(defaults::DEFAULT_DIAMETER_MM)
            .clamp(defaults::MIN_DIAMETER_MM, defaults::MAX_DIAMETER_MM)
    }

    /// Export resolution in dots per inch, clamped to the supported range.
    pub fn dpi(&self) -> u32 {
        self.dpi
            .unwrap_or(defaults::DEFAULT_DPI)
            .clamp(defaults::MIN_DPI, defaults::MAX_DPI)
    }

    /// Preferred sheet arrangement, defaulting to the grid layout.
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement.unwrap_or(Arrangement::Grid)
    }
}

/// Location of `settings.toml` under the platform configuration directory,
/// if one exists.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            zoom_in_factor: Some(1.25),
            zoom_out_factor: Some(0.8),
            diameter_mm: Some(32.0),
            dpi: Some(150),
            arrangement: Some(Arrangement::Compact),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.zoom_in_factor, config.zoom_in_factor);
        assert_eq!(loaded.zoom_out_factor, config.zoom_out_factor);
        assert_eq!(loaded.diameter_mm, config.diameter_mm);
        assert_eq!(loaded.dpi, config.dpi);
        assert_eq!(loaded.arrangement, config.arrangement);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.dpi, Some(defaults::DEFAULT_DPI));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn accessors_sanitize_out_of_range_values() {
        let config = Config {
            zoom_in_factor: Some(0.5),
            zoom_out_factor: Some(2.0),
            diameter_mm: Some(9999.0),
            dpi: Some(10),
            arrangement: None,
        };
        assert_eq!(config.zoom_in_factor(), defaults::DEFAULT_ZOOM_IN_FACTOR);
        assert_eq!(config.zoom_out_factor(), defaults::DEFAULT_ZOOM_OUT_FACTOR);
        assert_eq!(config.diameter_mm(), defaults::MAX_DIAMETER_MM);
        assert_eq!(config.dpi(), defaults::MIN_DPI);
    }

    #[test]
    fn accessors_fall_back_when_fields_absent() {
        let config = Config {
            zoom_in_factor: None,
            zoom_out_factor: None,
            diameter_mm: None,
            dpi: None,
            arrangement: None,
        };
        assert_eq!(config.zoom_in_factor(), defaults::DEFAULT_ZOOM_IN_FACTOR);
        assert_eq!(config.diameter_mm(), defaults::DEFAULT_DIAMETER_MM);
        assert_eq!(config.dpi(), defaults::DEFAULT_DPI);
        assert_eq!(config.arrangement(), Arrangement::Grid);
    }
}
