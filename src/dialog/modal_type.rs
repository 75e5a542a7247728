use serde::{Deserialize, Serialize};

/// Button labels shown on dialogs
pub mod labels {
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";
    pub const OK: &str = "OK";
    pub const ALRIGHT: &str = "Alright!";
    pub const GET_STARTED: &str = "Get started!";
}

/// The closed set of dialogs that can be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalType {
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
}

impl ModalType {
    pub const ALL: [ModalType; 11] = [
        ModalType::Help,
        ModalType::StartUp,
        ModalType::PageLeave,
        ModalType::CanvasCreate,
        ModalType::CanvasCreateNoSpace,
        ModalType::CanvasLoad,
        ModalType::CanvasSave,
        ModalType::CanvasReset,
        ModalType::CanvasExport,
        ModalType::Info,
        ModalType::Error,
    ];

    /// Labels of the decisions offered, in display order
    pub fn decision_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Help => &[labels::ALRIGHT],
            Self::StartUp => &[labels::GET_STARTED],
            Self::Info | Self::Error => &[labels::OK],
            Self::PageLeave
            | Self::CanvasCreate
            | Self::CanvasCreateNoSpace
            | Self::CanvasLoad
            | Self::CanvasSave
            | Self::CanvasReset
            | Self::CanvasExport => &[labels::YES, labels::NO],
        }
    }
}
