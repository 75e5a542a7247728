use std::path::Path;
use std::sync::Arc;

use egui::Color32;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

mod pixel_canvas;

pub use pixel_canvas::{CanvasSnapshot, PixelCanvas};

/// Canvas handle shared between the app and dialog handlers
pub type SharedCanvas = Arc<Mutex<dyn CanvasOps>>;

/// Width and height of a canvas, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Anything a drawing tool can paint
pub trait PixelTarget {
    fn set_fill(&mut self, color: Color32);
}

/// The smallest addressable cell of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub fill: Color32,
}

impl PixelTarget for Pixel {
    fn set_fill(&mut self, color: Color32) {
        self.fill = color;
    }
}

/// Operations the confirmation dialog may gate
pub trait CanvasOps: Send {
    /// Replace the grid with a blank `width`x`height` one.
    ///
    /// Fails with `InvalidProportions` or `NoSpace`.
    fn create(&mut self, width: usize, height: usize) -> Result<(), CanvasError>;

    /// Create the largest canvas that fits inside the given bounds
    fn create_bounded(&mut self, max_width: usize, max_height: usize) -> Result<(), CanvasError>;

    fn save(&mut self) -> Result<(), CanvasError>;

    fn reset(&mut self) -> Result<(), CanvasError>;

    fn export_artwork(&mut self) -> Result<(), CanvasError>;

    fn load(&mut self, path: &Path) -> Result<(), CanvasError>;

    fn max_width(&self) -> usize;

    fn max_height(&self) -> usize;
}
