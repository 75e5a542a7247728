use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use super::{CanvasOps, Dimensions, Pixel};
use crate::color;
use crate::config::EditorConfig;
use crate::error::{CanvasError, ConfigError};

/// Serialized form of a canvas, one hex color per pixel in row-major order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<String>,
}

/// A `width`x`height` grid of pixels
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
    blank_color: Color32,
    max_width: usize,
    max_height: usize,
    size_limit: Dimensions,
    max_aspect_ratio: f32,
    save_path: PathBuf,
    export_path: PathBuf,
}

impl PixelCanvas {
    /// Creates an empty (0x0) canvas. Call `create` to allocate a grid.
    pub fn new(config: &EditorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            blank_color: config.blank_color()?,
            max_width: config.max_size.width,
            max_height: config.max_size.height,
            size_limit: config.max_size,
            max_aspect_ratio: config.max_aspect_ratio,
            save_path: config.save_path.clone(),
            export_path: config.export_path.clone(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&Pixel> {
        let index = self.index(x, y)?;
        self.pixels.get(index)
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        let index = self.index(x, y)?;
        self.pixels.get_mut(index)
    }

    /// Update the largest canvas that fits on screen, never beyond the configured `max_size`
    pub fn set_available_space(&mut self, max_width: usize, max_height: usize) {
        self.max_width = max_width.min(self.size_limit.width);
        self.max_height = max_height.min(self.size_limit.height);
    }

    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|p| color::to_hex(p.fill)).collect(),
        }
    }

    /// Replace the grid with the contents of `snapshot`
    pub fn restore(&mut self, snapshot: CanvasSnapshot) -> Result<(), CanvasError> {
        let expected = snapshot.width.checked_mul(snapshot.height).ok_or_else(|| {
            CanvasError::InvalidSnapshot(format!("{}x{} is too large", snapshot.width, snapshot.height))
        })?;
        if snapshot.pixels.len() != expected {
            return Err(CanvasError::InvalidSnapshot(format!(
                "expected {} pixels for {}x{}, found {}",
                expected,
                snapshot.width,
                snapshot.height,
                snapshot.pixels.len()
            )));
        }

        let pixels = snapshot
            .pixels
            .iter()
            .map(|hex| {
                color::parse_hex_color(hex)
                    .map(|fill| Pixel { fill })
                    .map_err(|e| CanvasError::InvalidSnapshot(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.width = snapshot.width;
        self.height = snapshot.height;
        self.pixels = pixels;
        Ok(())
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn check_proportions(&self, width: usize, height: usize) -> Result<(), CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidProportions { width, height });
        }
        let long = width.max(height) as f32;
        let short = width.min(height) as f32;
        if long / short > self.max_aspect_ratio {
            return Err(CanvasError::InvalidProportions { width, height });
        }
        Ok(())
    }

    fn allocate(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Pixel { fill: self.blank_color }; width * height];
        log::info!("Created {}x{} canvas", width, height);
    }
}

impl CanvasOps for PixelCanvas {
    fn create(&mut self, width: usize, height: usize) -> Result<(), CanvasError> {
        self.check_proportions(width, height)?;
        if width > self.max_width || height > self.max_height {
            return Err(CanvasError::NoSpace {
                width,
                height,
                max_width: self.max_width,
                max_height: self.max_height,
            });
        }
        self.allocate(width, height);
        Ok(())
    }

    fn create_bounded(&mut self, max_width: usize, max_height: usize) -> Result<(), CanvasError> {
        let width = max_width.min(self.max_width);
        let height = max_height.min(self.max_height);
        self.check_proportions(width, height)?;
        self.allocate(width, height);
        Ok(())
    }

    fn save(&mut self) -> Result<(), CanvasError> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        fs::write(&self.save_path, json)?;
        log::info!("Saved canvas to {}", self.save_path.display());
        Ok(())
    }

    fn reset(&mut self) -> Result<(), CanvasError> {
        let blank = self.blank_color;
        for pixel in &mut self.pixels {
            pixel.fill = blank;
        }
        log::info!("Reset canvas");
        Ok(())
    }

    fn export_artwork(&mut self) -> Result<(), CanvasError> {
        let too_large = || CanvasError::ExportTooLarge {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;

        let image = image::RgbaImage::from_fn(width, height, |x, y| {
            let fill = self.pixels[y as usize * self.width + x as usize].fill;
            image::Rgba(fill.to_array())
        });
        image.save(&self.export_path)?;
        log::info!("Exported artwork to {}", self.export_path.display());
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<(), CanvasError> {
        let json = fs::read_to_string(path)?;
        let snapshot: CanvasSnapshot = serde_json::from_str(&json)?;
        self.restore(snapshot)?;
        log::info!("Loaded {}x{} canvas from {}", self.width, self.height, path.display());
        Ok(())
    }

    fn max_width(&self) -> usize {
        self.max_width
    }

    fn max_height(&self) -> usize {
        self.max_height
    }
}
