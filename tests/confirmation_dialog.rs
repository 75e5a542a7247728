use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;
use parking_lot::Mutex;
use pixel_art_maker::dialog::{
    labels, ContentKey, ContentRegistry, DialogServices, FileSelector, SurfaceState, Viewport,
};
use pixel_art_maker::tool::CANVAS_TOOLBOX_SELECTOR;
use pixel_art_maker::{
    CanvasError, CanvasOps, ConfirmationDialog, DialogArgs, DialogError, Dimensions, EditorConfig,
    ModalType, PixelCanvas, Resolution, SharedCanvas,
};

#[derive(Debug, Clone, Copy)]
enum Failure {
    InvalidProportions,
    NoSpace,
    Io,
}

impl Failure {
    fn to_error(self, width: usize, height: usize) -> CanvasError {
        match self {
            Failure::InvalidProportions => CanvasError::InvalidProportions { width, height },
            Failure::NoSpace => CanvasError::NoSpace {
                width,
                height,
                max_width: 64,
                max_height: 48,
            },
            Failure::Io => CanvasError::Io(std::io::Error::other("disk full")),
        }
    }
}

/// Canvas collaborator that records every call
struct FakeCanvas {
    calls: Vec<String>,
    failure: Option<Failure>,
}

impl FakeCanvas {
    fn new() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self {
            calls: Vec::new(),
            failure: None,
        }))
    }

    fn failing(failure: Failure) -> Arc<Mutex<Self>> {
        let canvas = Self::new();
        canvas.lock().failure = Some(failure);
        canvas
    }

    fn record(&mut self, call: String) -> Result<(), CanvasError> {
        self.calls.push(call);
        match self.failure {
            Some(failure) => Err(failure.to_error(0, 0)),
            None => Ok(()),
        }
    }
}

impl CanvasOps for FakeCanvas {
    fn create(&mut self, width: usize, height: usize) -> Result<(), CanvasError> {
        self.calls.push(format!("create {width}x{height}"));
        match self.failure {
            Some(failure) => Err(failure.to_error(width, height)),
            None => Ok(()),
        }
    }

    fn create_bounded(&mut self, max_width: usize, max_height: usize) -> Result<(), CanvasError> {
        self.calls.push(format!("create_bounded {max_width}x{max_height}"));
        Ok(())
    }

    fn save(&mut self) -> Result<(), CanvasError> {
        self.record("save".to_string())
    }

    fn reset(&mut self) -> Result<(), CanvasError> {
        self.record("reset".to_string())
    }

    fn export_artwork(&mut self) -> Result<(), CanvasError> {
        self.record("export".to_string())
    }

    fn load(&mut self, path: &Path) -> Result<(), CanvasError> {
        self.record(format!("load {}", path.display()))
    }

    fn max_width(&self) -> usize {
        64
    }

    fn max_height(&self) -> usize {
        48
    }
}

/// Scroll and file-selection collaborators that count their calls
#[derive(Default)]
struct RecordingServices {
    scrolls: Mutex<Vec<f32>>,
    file_dialogs: AtomicUsize,
}

impl Viewport for RecordingServices {
    fn position_of(&self, selector: &str) -> f32 {
        if selector == CANVAS_TOOLBOX_SELECTOR { 120.0 } else { 0.0 }
    }

    fn scroll_to(&self, top: f32) {
        self.scrolls.lock().push(top);
    }
}

impl FileSelector for RecordingServices {
    fn show_file_dialog(&self) {
        self.file_dialogs.fetch_add(1, Ordering::SeqCst);
    }
}

fn create_dialog() -> (ConfirmationDialog, Arc<RecordingServices>) {
    let recorder = Arc::new(RecordingServices::default());
    let services = DialogServices {
        viewport: recorder.clone(),
        file_selector: recorder.clone(),
    };
    (ConfirmationDialog::new(ContentRegistry::default(), services), recorder)
}

fn canvas_args(canvas: &Arc<Mutex<FakeCanvas>>) -> DialogArgs {
    let shared: SharedCanvas = canvas.clone();
    DialogArgs::default().with_canvas(shared)
}

#[test]
fn test_is_open_false_before_first_open() {
    let (dialog, _) = create_dialog();
    assert!(!dialog.is_open());
    assert!(dialog.surface().is_none());
}

#[test]
fn test_info_without_args_uses_registry_content() {
    let (mut dialog, recorder) = create_dialog();
    let mut confirmation = dialog.open(ModalType::Info, None).unwrap();

    let expected = ContentRegistry::default().get(ContentKey::Info).unwrap().clone();
    let surface = dialog.surface().unwrap();
    assert_eq!(surface.title(), expected.title);
    assert_eq!(surface.body(), expected.text);
    assert!(surface.is_html_body());
    assert_eq!(surface.labels(), &[labels::OK]);
    assert!(dialog.is_open());

    dialog.decide(labels::OK).unwrap();

    assert!(!dialog.is_open());
    assert_eq!(dialog.surface().unwrap().state(), SurfaceState::Closed);
    assert_eq!(confirmation.try_resolution(), Resolution::Abandoned);
    assert!(recorder.scrolls.lock().is_empty());
    assert_eq!(recorder.file_dialogs.load(Ordering::SeqCst), 0);
}

#[test]
fn test_title_override_keeps_default_body() {
    let (mut dialog, _) = create_dialog();
    dialog
        .open(ModalType::Help, Some(DialogArgs::default().with_title("Custom title")))
        .unwrap();

    let defaults = ContentRegistry::default().get(ContentKey::Help).unwrap().clone();
    let surface = dialog.surface().unwrap();
    assert_eq!(surface.title(), "Custom title");
    assert_eq!(surface.body(), defaults.text);
    assert!(surface.is_html_body());
}

#[test]
fn test_text_override_is_plain_text() {
    let (mut dialog, _) = create_dialog();
    dialog
        .open(ModalType::Error, Some(DialogArgs::default().with_text("<b>not markup</b>")))
        .unwrap();

    let defaults = ContentRegistry::default().get(ContentKey::Error).unwrap().clone();
    let surface = dialog.surface().unwrap();
    assert_eq!(surface.title(), defaults.title);
    assert_eq!(surface.body(), "<b>not markup</b>");
    assert!(!surface.is_html_body());
    assert_eq!(surface.display_body(), "<b>not markup</b>");
}

#[test]
fn test_page_leave_yes_resolves_true() {
    let (mut dialog, _) = create_dialog();
    let confirmation = dialog.open(ModalType::PageLeave, None).unwrap();
    assert_eq!(dialog.surface().unwrap().labels(), &[labels::YES, labels::NO]);

    dialog.decide(labels::YES).unwrap();

    assert!(!dialog.is_open());
    assert_eq!(block_on(confirmation), Some(true));
}

#[test]
fn test_page_leave_no_never_resolves_true() {
    let (mut dialog, _) = create_dialog();
    let mut confirmation = dialog.open(ModalType::PageLeave, None).unwrap();
    assert_eq!(confirmation.try_resolution(), Resolution::Pending);

    dialog.decide(labels::NO).unwrap();

    assert!(!dialog.is_open());
    assert_eq!(confirmation.try_resolution(), Resolution::Abandoned);
    assert_eq!(block_on(confirmation), None);
}

#[test]
fn test_create_without_space_offers_bounded_canvas() {
    let (mut dialog, recorder) = create_dialog();
    let canvas = FakeCanvas::failing(Failure::NoSpace);
    let args = canvas_args(&canvas).with_dimensions(4000, 4000);

    let mut first = dialog.open(ModalType::CanvasCreate, Some(args)).unwrap();
    dialog.decide(labels::YES).unwrap();

    assert_eq!(canvas.lock().calls, vec!["create 4000x4000"]);
    assert_eq!(*recorder.scrolls.lock(), vec![120.0]);
    // The first session ended without resolving
    assert_eq!(first.try_resolution(), Resolution::Abandoned);

    let surface = dialog.surface().unwrap();
    assert!(dialog.is_open());
    assert_eq!(surface.modal_type(), ModalType::CanvasCreateNoSpace);
    assert_eq!(
        surface.title(),
        ContentRegistry::default().get(ContentKey::CanvasNoSpace).unwrap().title
    );
    assert!(surface.body().contains("width: 64, height: 48"));

    canvas.lock().failure = None;
    dialog.decide(labels::YES).unwrap();

    assert!(!dialog.is_open());
    assert_eq!(
        canvas.lock().calls,
        vec!["create 4000x4000", "create_bounded 64x48"]
    );
}

#[test]
fn test_create_with_invalid_proportions_opens_info() {
    let (mut dialog, recorder) = create_dialog();
    let canvas = FakeCanvas::failing(Failure::InvalidProportions);
    let args = canvas_args(&canvas).with_dimensions(0, 10);

    dialog.open(ModalType::CanvasCreate, Some(args)).unwrap();
    dialog.decide(labels::YES).unwrap();

    let invalid = ContentRegistry::default()
        .get(ContentKey::CanvasInvalidProportions)
        .unwrap()
        .clone();
    let surface = dialog.surface().unwrap();
    assert_eq!(surface.modal_type(), ModalType::Info);
    assert_eq!(surface.title(), invalid.title);
    assert!(!surface.body().contains('<'));
    assert_eq!(surface.labels(), &[labels::OK]);
    assert_eq!(recorder.scrolls.lock().len(), 1);

    dialog.decide(labels::OK).unwrap();
    assert!(!dialog.is_open());
}

#[test]
fn test_successful_create_scrolls_to_toolbox() {
    let (mut dialog, recorder) = create_dialog();
    let canvas = FakeCanvas::new();

    dialog
        .open(ModalType::CanvasCreate, Some(canvas_args(&canvas).with_dimensions(16, 16)))
        .unwrap();
    dialog.decide(labels::YES).unwrap();

    assert!(!dialog.is_open());
    assert_eq!(canvas.lock().calls, vec!["create 16x16"]);
    assert_eq!(*recorder.scrolls.lock(), vec![120.0]);
}

#[test]
fn test_canvas_operations_run_only_on_yes() {
    let cases = [
        (ModalType::CanvasSave, "save"),
        (ModalType::CanvasReset, "reset"),
        (ModalType::CanvasExport, "export"),
    ];

    for (modal_type, call) in cases {
        let (mut dialog, _) = create_dialog();
        let canvas = FakeCanvas::new();

        dialog.open(modal_type, Some(canvas_args(&canvas))).unwrap();
        dialog.decide(labels::NO).unwrap();
        assert!(!dialog.is_open());
        assert!(canvas.lock().calls.is_empty(), "{modal_type:?}");

        dialog.open(modal_type, Some(canvas_args(&canvas))).unwrap();
        dialog.decide(labels::YES).unwrap();
        assert!(!dialog.is_open());
        assert_eq!(canvas.lock().calls, vec![call]);
    }
}

#[test]
fn test_load_triggers_file_selection() {
    let (mut dialog, recorder) = create_dialog();

    dialog.open(ModalType::CanvasLoad, None).unwrap();
    dialog.decide(labels::NO).unwrap();
    assert_eq!(recorder.file_dialogs.load(Ordering::SeqCst), 0);

    dialog.open(ModalType::CanvasLoad, None).unwrap();
    dialog.decide(labels::YES).unwrap();
    assert_eq!(recorder.file_dialogs.load(Ordering::SeqCst), 1);
    assert!(!dialog.is_open());
}

#[test]
fn test_other_canvas_failures_propagate_after_closing() {
    let (mut dialog, _) = create_dialog();
    let canvas = FakeCanvas::failing(Failure::Io);

    dialog.open(ModalType::CanvasSave, Some(canvas_args(&canvas))).unwrap();
    let result = dialog.decide(labels::YES);

    assert!(matches!(result, Err(DialogError::Canvas(CanvasError::Io(_)))));
    assert!(!dialog.is_open());
}

#[test]
fn test_exactly_one_decision_per_session() {
    for modal_type in ModalType::ALL {
        let (mut dialog, _) = create_dialog();
        let canvas = FakeCanvas::new();
        let args = canvas_args(&canvas).with_dimensions(8, 8);

        dialog.open(modal_type, Some(args)).unwrap();
        let labels = dialog.surface().unwrap().labels().to_vec();
        assert_eq!(labels, modal_type.decision_labels());

        dialog.decide(labels[0]).unwrap();

        // CanvasCreate succeeds here, so no follow-up dialog opens
        assert!(!dialog.is_open(), "{modal_type:?}");
        assert!(matches!(dialog.decide(labels[0]), Err(DialogError::NotOpen)));
    }
}

#[test]
fn test_unknown_decision_keeps_dialog_open() {
    let (mut dialog, _) = create_dialog();
    dialog.open(ModalType::Help, None).unwrap();

    let result = dialog.decide("Maybe");

    assert!(matches!(result, Err(DialogError::UnknownDecision(label)) if label == "Maybe"));
    assert!(dialog.is_open());
    dialog.decide(labels::ALRIGHT).unwrap();
    assert!(!dialog.is_open());
}

#[test]
fn test_decide_without_dialog_fails() {
    let (mut dialog, _) = create_dialog();
    assert!(matches!(dialog.decide(labels::OK), Err(DialogError::NotOpen)));
}

#[test]
fn test_external_close_runs_no_handler() {
    let (mut dialog, _) = create_dialog();
    let canvas = FakeCanvas::new();
    let mut confirmation = dialog
        .open(ModalType::CanvasReset, Some(canvas_args(&canvas)))
        .unwrap();

    dialog.close();

    assert!(!dialog.is_open());
    assert!(canvas.lock().calls.is_empty());
    assert_eq!(confirmation.try_resolution(), Resolution::Abandoned);
}

#[test]
fn test_missing_collaborators_fail_fast() {
    let (mut dialog, _) = create_dialog();

    let result = dialog.open(ModalType::CanvasSave, None);
    assert!(matches!(
        result,
        Err(DialogError::MissingArgument { modal_type: ModalType::CanvasSave, .. })
    ));

    let canvas = FakeCanvas::new();
    let result = dialog.open(ModalType::CanvasCreate, Some(canvas_args(&canvas)));
    assert!(matches!(
        result,
        Err(DialogError::MissingArgument { modal_type: ModalType::CanvasCreate, .. })
    ));
    assert!(!dialog.is_open());
}

#[test]
fn test_missing_registry_content_fails_fast() {
    let recorder = Arc::new(RecordingServices::default());
    let services = DialogServices {
        viewport: recorder.clone(),
        file_selector: recorder,
    };
    let mut dialog = ConfirmationDialog::new(ContentRegistry::empty(), services);

    let result = dialog.open(ModalType::Info, None);

    assert!(matches!(result, Err(DialogError::MissingContent(ContentKey::Info))));
    assert!(!dialog.is_open());
}

#[test]
fn test_new_open_replaces_previous_session() {
    let (mut dialog, _) = create_dialog();
    let mut first = dialog.open(ModalType::PageLeave, None).unwrap();
    let first_id = dialog.surface().unwrap().session_id();

    let second = dialog.open(ModalType::PageLeave, None).unwrap();

    assert_ne!(dialog.surface().unwrap().session_id(), first_id);
    assert_eq!(first.try_resolution(), Resolution::Abandoned);

    dialog.decide(labels::YES).unwrap();
    assert_eq!(block_on(second), Some(true));
}

#[test]
fn test_create_flow_with_pixel_canvas() {
    let (mut dialog, _) = create_dialog();
    let config = EditorConfig {
        max_size: Dimensions::new(40, 30),
        ..EditorConfig::default()
    };
    let canvas = Arc::new(Mutex::new(PixelCanvas::new(&config).unwrap()));
    let shared: SharedCanvas = canvas.clone();

    dialog
        .open(
            ModalType::CanvasCreate,
            Some(DialogArgs::default().with_canvas(shared).with_dimensions(4000, 4000)),
        )
        .unwrap();
    dialog.decide(labels::YES).unwrap();

    assert_eq!(dialog.surface().unwrap().modal_type(), ModalType::CanvasCreateNoSpace);
    assert!(dialog.surface().unwrap().body().contains("width: 40, height: 30"));

    dialog.decide(labels::YES).unwrap();

    assert!(!dialog.is_open());
    assert_eq!(canvas.lock().dimensions(), Dimensions::new(40, 30));
}
