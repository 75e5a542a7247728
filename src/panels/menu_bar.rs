use crate::PaintApp;
use crate::dialog::ModalType;

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    let mut requested = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Width");
            ui.add(egui::DragValue::new(&mut app.new_canvas_size.width).range(0..=4096));
            ui.label("Height");
            ui.add(egui::DragValue::new(&mut app.new_canvas_size.height).range(0..=4096));

            if ui.button("New canvas").clicked() {
                requested = Some(ModalType::CanvasCreate);
            }

            ui.separator();

            // Each button only asks for confirmation, the dialog does the work
            for (label, modal_type) in [
                ("Reset", ModalType::CanvasReset),
                ("Save", ModalType::CanvasSave),
                ("Load", ModalType::CanvasLoad),
                ("Export", ModalType::CanvasExport),
            ] {
                if ui.button(label).clicked() {
                    requested = Some(modal_type);
                }
            }

            ui.separator();

            if ui.button("Help").clicked() {
                requested = Some(ModalType::Help);
            }
        });
    });

    match requested {
        Some(ModalType::Help) => app.show(ModalType::Help),
        Some(modal_type) => {
            log::debug!("Requested {:?} from the menu", modal_type);
            app.request(modal_type);
        }
        None => {}
    }
}
