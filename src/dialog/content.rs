use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ModalType;
use crate::error::{ConfigError, DialogError};

/// Keys of the content registry: one per modal type plus the two canvas
/// failure notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKey {
    Help,
    StartUp,
    PageLeave,
    CanvasCreate,
    CanvasCreateNoSpace,
    CanvasLoad,
    CanvasSave,
    CanvasReset,
    CanvasExport,
    Info,
    Error,
    CanvasInvalidProportions,
    CanvasNoSpace,
}

impl From<ModalType> for ContentKey {
    fn from(modal_type: ModalType) -> Self {
        match modal_type {
            ModalType::Help => Self::Help,
            ModalType::StartUp => Self::StartUp,
            ModalType::PageLeave => Self::PageLeave,
            ModalType::CanvasCreate => Self::CanvasCreate,
            ModalType::CanvasCreateNoSpace => Self::CanvasCreateNoSpace,
            ModalType::CanvasLoad => Self::CanvasLoad,
            ModalType::CanvasSave => Self::CanvasSave,
            ModalType::CanvasReset => Self::CanvasReset,
            ModalType::CanvasExport => Self::CanvasExport,
            ModalType::Info => Self::Info,
            ModalType::Error => Self::Error,
        }
    }
}

/// Default title and body of a dialog. Bodies are markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalContent {
    pub title: String,
    pub text: String,
}

impl ModalContent {
    pub fn new(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

/// Static mapping from content key to dialog wording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRegistry {
    entries: HashMap<ContentKey, ModalContent>,
}

impl Default for ContentRegistry {
    fn default() -> Self {
        use ContentKey::*;

        let entries = [
            (Help, ModalContent::new(
                "How to draw",
                "<p>Create a canvas, pick a color and click or drag over the pixels.</p>\
                 <p>Use the <b>Eraser</b> to clear pixels back to the background color.</p>",
            )),
            (StartUp, ModalContent::new(
                "Pixel Art Maker",
                "<p>Welcome! Choose the size of your canvas to begin.</p>",
            )),
            (PageLeave, ModalContent::new(
                "Leave the editor?",
                "<p>Unsaved artwork will be lost. Do you really want to leave?</p>",
            )),
            (CanvasCreate, ModalContent::new(
                "Create a new canvas",
                "<p>The current artwork will be replaced. Do you want to continue?</p>",
            )),
            (CanvasCreateNoSpace, ModalContent::new(
                "Not enough space",
                "<p>The dimensions selected exceed the available space. \
                 Would you like to create the biggest possible canvas?</p>",
            )),
            (CanvasLoad, ModalContent::new(
                "Load artwork",
                "<p>The current artwork will be replaced by the loaded one. Do you want to continue?</p>",
            )),
            (CanvasSave, ModalContent::new(
                "Save artwork",
                "<p>Any previously saved artwork will be overwritten. Do you want to continue?</p>",
            )),
            (CanvasReset, ModalContent::new(
                "Reset canvas",
                "<p>Every pixel will be cleared. Do you want to continue?</p>",
            )),
            (CanvasExport, ModalContent::new(
                "Export artwork",
                "<p>The artwork will be exported as a PNG image. Do you want to continue?</p>",
            )),
            (Info, ModalContent::new("Information", "<p>Done.</p>")),
            (Error, ModalContent::new(
                "Something went wrong",
                "<p>The operation could not be completed.</p>",
            )),
            (CanvasInvalidProportions, ModalContent::new(
                "Invalid proportions",
                "<p>Width and height must be greater than zero and the canvas \
                 cannot be much longer than it is wide.</p>",
            )),
            (CanvasNoSpace, ModalContent::new(
                "Not enough space",
                "<p>The dimensions selected exceed the available space.</p>",
            )),
        ];

        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl ContentRegistry {
    /// A registry with no entries
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: ContentKey) -> Result<&ModalContent, DialogError> {
        self.entries.get(&key).ok_or(DialogError::MissingContent(key))
    }

    pub fn insert(&mut self, key: ContentKey, content: ModalContent) {
        self.entries.insert(key, content);
    }

    /// Overlay the entries of a JSON object (`{"help": {"title": .., "text": ..}}`)
    pub fn merge_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let overrides: ContentRegistry = serde_json::from_str(json)?;
        log::debug!("Merging {} dialog content overrides", overrides.entries.len());
        self.entries.extend(overrides.entries);
        Ok(())
    }

    /// The built-in registry with the entries from `path` on top
    pub fn with_overrides(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let mut registry = Self::default();
        registry.merge_json(&json)?;
        Ok(registry)
    }
}
