//! Modal confirmations gating canvas operations.
//!
//! `ConfirmationDialog::open` presents a prompt for a `ModalType` and returns
//! a `Confirmation`. The decision handlers for each type are built per call
//! from the collaborators passed in `DialogArgs`, so the dialog itself knows
//! nothing about the operations it gates.

mod confirmation;
mod confirmation_dialog;
mod content;
mod decisions;
mod modal_type;
mod services;

pub use confirmation::{Confirmation, Resolution};
pub use confirmation_dialog::{ConfirmationDialog, DialogArgs, DialogSurface, SurfaceState};
pub use content::{ContentKey, ContentRegistry, ModalContent};
pub use modal_type::{labels, ModalType};
pub use services::{DialogServices, FileSelector, Viewport};
