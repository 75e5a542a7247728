use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::canvas::Dimensions;
use crate::color;
use crate::error::ConfigError;

/// Editor settings, loaded from a JSON file.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial paint color as `#RRGGBB`
    pub default_color: String,
    /// Color of blank and erased pixels as `#RRGGBB`
    pub blank_color: String,
    /// Size of the canvas created at start-up
    pub initial_size: Dimensions,
    /// Upper bound on the canvas size; the on-screen space can only lower it
    pub max_size: Dimensions,
    /// Largest allowed ratio between the long and short side
    pub max_aspect_ratio: f32,
    /// On-screen size of one canvas pixel
    pub pixel_size: f32,
    pub save_path: PathBuf,
    pub export_path: PathBuf,
    /// Optional JSON file overriding dialog wording
    pub dialog_content_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_color: "#000000".to_string(),
            blank_color: "#FFFFFF".to_string(),
            initial_size: Dimensions::new(16, 16),
            max_size: Dimensions::new(64, 48),
            max_aspect_ratio: 8.0,
            pixel_size: 12.0,
            save_path: PathBuf::from("pixel-art.json"),
            export_path: PathBuf::from("pixel-art.png"),
            dialog_content_path: None,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        // Surface bad colors at load time rather than on first paint
        config.default_color()?;
        config.blank_color()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path` if it exists, otherwise use the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            log::info!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn default_color(&self) -> Result<Color32, ConfigError> {
        Ok(color::parse_hex_color(&self.default_color)?)
    }

    pub fn blank_color(&self) -> Result<Color32, ConfigError> {
        Ok(color::parse_hex_color(&self.blank_color)?)
    }
}
