use egui::Color32;

use super::ToolKind;
use crate::canvas::PixelTarget;
use crate::color::{self, BLANK_PIXEL_COLOR, DEFAULT_PICKER_COLOR};

/// Pressed state of the two toolbar buttons.
///
/// Both start unpressed. After the first explicit selection exactly one of
/// them is pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolbarIndicators {
    brush: bool,
    eraser: bool,
}

impl ToolbarIndicators {
    pub fn is_pressed(&self, tool: ToolKind) -> bool {
        match tool {
            ToolKind::Brush => self.brush,
            ToolKind::Eraser => self.eraser,
        }
    }

    fn press(&mut self, tool: ToolKind) {
        self.brush = tool == ToolKind::Brush;
        self.eraser = tool == ToolKind::Eraser;
    }
}

/// Single source of truth for what happens when a pixel is targeted
#[derive(Debug, Clone)]
pub struct DrawingTool {
    active_tool: ToolKind,
    active_color: Color32,
    blank_color: Color32,
    indicators: ToolbarIndicators,
}

impl Default for DrawingTool {
    fn default() -> Self {
        Self::new(DEFAULT_PICKER_COLOR, BLANK_PIXEL_COLOR)
    }
}

impl DrawingTool {
    /// Creates a brush with the given paint color. `blank_color` is what the
    /// eraser leaves behind.
    pub fn new(color: Color32, blank_color: Color32) -> Self {
        Self {
            active_tool: ToolKind::Brush,
            active_color: color,
            blank_color,
            indicators: ToolbarIndicators::default(),
        }
    }

    /// Make `tool` the active tool and press its toolbar button
    pub fn select_tool(&mut self, tool: ToolKind) {
        if self.active_tool != tool {
            log::debug!("Tool changed: {} -> {}", self.active_tool.name(), tool.name());
        }
        self.active_tool = tool;
        self.indicators.press(tool);
    }

    /// Change the paint color. Does not switch tools.
    pub fn set_color(&mut self, color: Color32) {
        log::debug!("Paint color set to {}", color::to_hex(color));
        self.active_color = color;
    }

    /// Paint or erase a single pixel
    pub fn apply_to_pixel(&self, pixel: &mut impl PixelTarget) {
        pixel.set_fill(self.fill_color());
    }

    /// The color `apply_to_pixel` would give a pixel right now
    pub fn fill_color(&self) -> Color32 {
        match self.active_tool {
            ToolKind::Brush => self.active_color,
            ToolKind::Eraser => self.blank_color,
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn color(&self) -> Color32 {
        self.active_color
    }

    pub fn blank_color(&self) -> Color32 {
        self.blank_color
    }

    pub fn indicators(&self) -> ToolbarIndicators {
        self.indicators
    }

    pub fn is_pressed(&self, tool: ToolKind) -> bool {
        self.indicators.is_pressed(tool)
    }
}
