use egui::Color32;

use super::{DrawingTool, ToolKind};
use crate::color;
use crate::error::ColorError;

/// Selector of the toolbox region, used to scroll it into view
pub const CANVAS_TOOLBOX_SELECTOR: &str = "#canvas-toolbox";

/// The toolbox next to the canvas: owns the drawing tool and the color
/// picker wiring.
#[derive(Debug, Clone)]
pub struct CanvasToolBox {
    visible: bool,
    drawing_tool: DrawingTool,
}

impl CanvasToolBox {
    pub fn new(initial_color: Color32, blank_color: Color32) -> Self {
        let mut toolbox = Self {
            visible: false,
            drawing_tool: DrawingTool::new(initial_color, blank_color),
        };
        toolbox.init_color_picker(initial_color);
        toolbox
    }

    /// Show or hide the toolbox
    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Seed the picker color without touching the active tool
    pub fn init_color_picker(&mut self, color: Color32) {
        self.drawing_tool.set_color(color);
    }

    /// Called by the color picker on every user change.
    ///
    /// Picking a color always switches back to the brush.
    pub fn on_color_change(&mut self, hex: &str) -> Result<(), ColorError> {
        let color = color::parse_hex_color(hex)?;
        self.drawing_tool.set_color(color);
        self.drawing_tool.select_tool(ToolKind::Brush);
        Ok(())
    }

    pub fn drawing_tool(&self) -> &DrawingTool {
        &self.drawing_tool
    }

    pub fn drawing_tool_mut(&mut self) -> &mut DrawingTool {
        &mut self.drawing_tool
    }
}
