mod drawing_tool;
mod toolbox;
pub mod types;

pub use drawing_tool::{DrawingTool, ToolbarIndicators};
pub use toolbox::{CanvasToolBox, CANVAS_TOOLBOX_SELECTOR};
pub use types::ToolKind;
