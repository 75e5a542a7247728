mod central_panel;
mod dialog_window;
mod menu_bar;
mod tools_panel;

pub use central_panel::central_panel;
pub use dialog_window::{dialog_window, load_prompt};
pub use menu_bar::menu_bar;
pub use tools_panel::tools_panel;
