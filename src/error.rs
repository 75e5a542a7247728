use thiserror::Error;

use crate::dialog::{ContentKey, ModalType};

/// Errors reported by canvas operations
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The requested dimensions violate the canvas constraints
    #[error("Invalid canvas proportions: {width}x{height}")]
    InvalidProportions { width: usize, height: usize },

    /// The requested dimensions exceed the available space
    #[error("Not enough space for a {width}x{height} canvas (maximum {max_width}x{max_height})")]
    NoSpace {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },

    #[error("Canvas file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize canvas: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The canvas is larger than an image can hold
    #[error("Canvas {width}x{height} is too large to export")]
    ExportTooLarge { width: usize, height: usize },

    #[error("Failed to export artwork: {0}")]
    Export(#[from] image::ImageError),

    #[error("Invalid canvas snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Errors raised by the confirmation dialog
#[derive(Debug, Error)]
pub enum DialogError {
    /// The content registry has no entry for the requested key
    #[error("No dialog content registered for {0:?}")]
    MissingContent(ContentKey),

    /// A gated operation was opened without the collaborator it needs
    #[error("{modal_type:?} dialog requires {argument}")]
    MissingArgument {
        modal_type: ModalType,
        argument: &'static str,
    },

    #[error("No dialog is open")]
    NotOpen,

    #[error("Unknown decision '{0}'")]
    UnknownDecision(String),

    /// A decision handler's side effect failed
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}'")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Color(#[from] ColorError),
}
