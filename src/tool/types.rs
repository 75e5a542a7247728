use serde::{Deserialize, Serialize};

/// The mutually exclusive paint modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::Brush, ToolKind::Eraser];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
        }
    }
}
