#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod panels;
pub mod tool;

pub use app::PaintApp;
pub use canvas::{CanvasOps, Dimensions, Pixel, PixelCanvas, PixelTarget, SharedCanvas};
pub use config::EditorConfig;
pub use dialog::{Confirmation, ConfirmationDialog, DialogArgs, ModalType, Resolution};
pub use error::{CanvasError, ColorError, ConfigError, DialogError};
pub use tool::{CanvasToolBox, DrawingTool, ToolKind};
