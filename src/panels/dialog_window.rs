use std::path::PathBuf;

use crate::PaintApp;
use crate::dialog::SurfaceState;

/// Render the open dialog surface, one button per decision
pub fn dialog_window(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(surface) = app
        .dialog()
        .surface()
        .filter(|surface| surface.state() == SurfaceState::Open)
    else {
        return;
    };

    let title = surface.title().to_owned();
    let body = surface.display_body();
    let labels = surface.labels().to_vec();
    let session_id = surface.session_id();

    let mut clicked = None;
    egui::Window::new(title)
        .id(egui::Id::new(("dialog", session_id)))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(body);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for label in &labels {
                    if ui.button(*label).clicked() {
                        clicked = Some(*label);
                    }
                }
            });
        });

    if let Some(label) = clicked {
        app.decide(label);
    }
}

/// Path prompt shown after a load has been confirmed
pub fn load_prompt(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(path) = app.load_path.as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;
    egui::Window::new("Open artwork")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.text_edit_singleline(path);
            ui.horizontal(|ui| {
                submit = ui.button("Open").clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if submit {
        let path = PathBuf::from(path.trim());
        app.load_path = None;
        app.load_from(&path);
    } else if cancel {
        app.load_path = None;
    }
}
