use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use egui::Color32;
use parking_lot::Mutex;

use crate::canvas::{CanvasOps, Dimensions, PixelCanvas, SharedCanvas};
use crate::color;
use crate::config::EditorConfig;
use crate::dialog::{
    Confirmation, ConfirmationDialog, ContentRegistry, DialogArgs, DialogServices, FileSelector,
    ModalType, Resolution, Viewport,
};
use crate::error::{ConfigError, DialogError};
use crate::panels;
use crate::tool::{CanvasToolBox, ToolKind, CANVAS_TOOLBOX_SELECTOR};

/// Tool settings restored when the app restarts
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(default)]
struct PersistedSettings {
    color: String,
    tool: ToolKind,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            color: color::to_hex(color::DEFAULT_PICKER_COLOR),
            tool: ToolKind::Brush,
        }
    }
}

/// Scroll and file requests raised by dialog handlers, served on the next frame
#[derive(Debug, Default)]
pub struct UiRequests {
    toolbox_top: Mutex<f32>,
    scroll_target: Mutex<Option<f32>>,
    file_dialog: AtomicBool,
}

impl UiRequests {
    pub fn set_toolbox_top(&self, top: f32) {
        *self.toolbox_top.lock() = top;
    }

    pub fn take_scroll_target(&self) -> Option<f32> {
        self.scroll_target.lock().take()
    }

    pub fn take_file_dialog(&self) -> bool {
        self.file_dialog.swap(false, Ordering::Relaxed)
    }
}

impl Viewport for UiRequests {
    fn position_of(&self, selector: &str) -> f32 {
        if selector == CANVAS_TOOLBOX_SELECTOR {
            *self.toolbox_top.lock()
        } else {
            0.0
        }
    }

    fn scroll_to(&self, top: f32) {
        *self.scroll_target.lock() = Some(top);
    }
}

impl FileSelector for UiRequests {
    fn show_file_dialog(&self) {
        self.file_dialog.store(true, Ordering::Relaxed);
    }
}

pub struct PaintApp {
    config: EditorConfig,
    toolbox: CanvasToolBox,
    canvas: Arc<Mutex<PixelCanvas>>,
    dialog: ConfirmationDialog,
    requests: Arc<UiRequests>,
    /// Size typed into the "New canvas" fields
    pub(crate) new_canvas_size: Dimensions,
    /// Path typed into the load prompt, `None` while the prompt is hidden
    pub(crate) load_path: Option<String>,
    page_leave: Option<Confirmation>,
    allow_close: bool,
    started: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Result<Self, ConfigError> {
        let mut app = Self::with_config(config)?;

        // Restore the last used tool and color
        if let Some(settings) = cc
            .storage
            .and_then(|storage| eframe::get_value::<PersistedSettings>(storage, eframe::APP_KEY))
        {
            if let Err(err) = app.toolbox.on_color_change(&settings.color) {
                log::warn!("Ignoring persisted color: {}", err);
            }
            app.toolbox.drawing_tool_mut().select_tool(settings.tool);
        }

        Ok(app)
    }

    /// Build the app without a window, from `config` alone
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        let registry = match &config.dialog_content_path {
            Some(path) => ContentRegistry::with_overrides(path)?,
            None => ContentRegistry::default(),
        };

        let mut canvas = PixelCanvas::new(&config)?;
        let initial = config.initial_size;
        if let Err(err) = canvas.create(initial.width, initial.height) {
            log::warn!("Initial canvas rejected ({}), using the available space", err);
            if let Err(err) = canvas.create_bounded(initial.width, initial.height) {
                log::error!("Could not create the initial canvas: {}", err);
            }
        }

        let requests = Arc::new(UiRequests::default());
        let services = DialogServices {
            viewport: requests.clone(),
            file_selector: requests.clone(),
        };

        Ok(Self {
            toolbox: CanvasToolBox::new(config.default_color()?, config.blank_color()?),
            canvas: Arc::new(Mutex::new(canvas)),
            dialog: ConfirmationDialog::new(registry, services),
            requests,
            new_canvas_size: initial,
            load_path: None,
            page_leave: None,
            allow_close: false,
            started: false,
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn toolbox(&self) -> &CanvasToolBox {
        &self.toolbox
    }

    pub fn toolbox_mut(&mut self) -> &mut CanvasToolBox {
        &mut self.toolbox
    }

    pub fn canvas(&self) -> &Arc<Mutex<PixelCanvas>> {
        &self.canvas
    }

    pub fn dialog(&self) -> &ConfirmationDialog {
        &self.dialog
    }

    pub fn requests(&self) -> &UiRequests {
        &self.requests
    }

    fn shared_canvas(&self) -> SharedCanvas {
        self.canvas.clone()
    }

    /// Open the confirmation gating `modal_type` with the shared canvas
    pub fn request(&mut self, modal_type: ModalType) {
        let mut args = DialogArgs::default().with_canvas(self.shared_canvas());
        if modal_type == ModalType::CanvasCreate {
            args.callback_args = Some(self.new_canvas_size);
        }
        if let Err(err) = self.dialog.open(modal_type, Some(args)) {
            self.report(err);
        }
    }

    /// Open a dialog that needs no collaborators
    pub fn show(&mut self, modal_type: ModalType) {
        if let Err(err) = self.dialog.open(modal_type, None) {
            self.report(err);
        }
    }

    /// Forward a button press to the open dialog
    pub fn decide(&mut self, label: &str) {
        if let Err(err) = self.dialog.decide(label) {
            self.report(err);
        }
    }

    /// Paint or erase the pixel at `(x, y)`
    pub fn paint_at(&mut self, x: usize, y: usize) {
        let mut canvas = self.canvas.lock();
        if let Some(pixel) = canvas.pixel_mut(x, y) {
            self.toolbox.drawing_tool().apply_to_pixel(pixel);
        }
    }

    pub fn pick_color(&mut self, picked: Color32) {
        if let Err(err) = self.toolbox.on_color_change(&color::to_hex(picked)) {
            log::error!("Color picker produced an invalid color: {}", err);
        }
    }

    pub fn load_from(&mut self, path: &Path) {
        let result = self.canvas.lock().load(path);
        if let Err(err) = result {
            self.report(err.into());
        }
    }

    fn report(&mut self, err: DialogError) {
        log::error!("{}", err);
        let args = DialogArgs::default().with_text(err.to_string());
        if let Err(err) = self.dialog.open(ModalType::Error, Some(args)) {
            log::error!("Could not show error dialog: {}", err);
        }
    }

    /// Intercept window close requests until the user confirms leaving
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            if self.page_leave.is_none() {
                match self.dialog.open(ModalType::PageLeave, None) {
                    Ok(confirmation) => self.page_leave = Some(confirmation),
                    Err(err) => self.report(err),
                }
            }
        }

        if let Some(confirmation) = &mut self.page_leave {
            match confirmation.try_resolution() {
                Resolution::Pending => {}
                Resolution::Resolved(true) => {
                    log::info!("Leaving the editor");
                    self.page_leave = None;
                    self.allow_close = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Resolution::Resolved(false) | Resolution::Abandoned => self.page_leave = None,
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let tool = self.toolbox.drawing_tool();
        let settings = PersistedSettings {
            color: color::to_hex(tool.color()),
            tool: tool.active_tool(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            self.show(ModalType::StartUp);
        }

        self.handle_close_request(ctx);

        if self.requests.take_file_dialog() {
            self.load_path = Some(self.config.save_path.display().to_string());
        }

        let has_canvas = !self.canvas.lock().is_empty();
        self.toolbox.set_visibility(has_canvas);

        panels::menu_bar(self, ctx);
        if self.toolbox.is_visible() {
            panels::tools_panel(self, ctx);
        }
        panels::central_panel(self, ctx);
        panels::load_prompt(self, ctx);
        panels::dialog_window(self, ctx);
    }
}
