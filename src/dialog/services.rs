use std::sync::Arc;

/// Scroll/focus utility used to bring a region of the editor into view
pub trait Viewport: Send + Sync {
    /// Vertical position of the region named by `selector`
    fn position_of(&self, selector: &str) -> f32;

    /// Fire-and-forget scroll request
    fn scroll_to(&self, top: f32);
}

/// Opens the file-selection surface used to load artwork
pub trait FileSelector: Send + Sync {
    fn show_file_dialog(&self);
}

/// Collaborators available to every dialog session
#[derive(Clone)]
pub struct DialogServices {
    pub viewport: Arc<dyn Viewport>,
    pub file_selector: Arc<dyn FileSelector>,
}

impl std::fmt::Debug for DialogServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogServices").finish_non_exhaustive()
    }
}
