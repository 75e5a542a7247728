use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let pixel_size = app.config().pixel_size.max(1.0);

        // Whatever fits in the panel is the largest canvas we can offer
        let available = ui.available_size();
        let max_width = ((available.x / pixel_size).floor() as usize).max(1);
        let max_height = ((available.y / pixel_size).floor() as usize).max(1);

        let (width, height) = {
            let mut canvas = app.canvas().lock();
            canvas.set_available_space(max_width, max_height);
            (canvas.width(), canvas.height())
        };

        if width == 0 || height == 0 {
            ui.centered_and_justified(|ui| {
                ui.label("Create a canvas to start drawing");
            });
            return;
        }

        let size = egui::vec2(width as f32 * pixel_size, height as f32 * pixel_size);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    let x = (offset.x / pixel_size) as usize;
                    let y = (offset.y / pixel_size) as usize;
                    app.paint_at(x, y);
                }
            }
        }

        let canvas = app.canvas().lock();
        let grid_line = egui::Stroke::new(0.5, egui::Color32::from_gray(200));
        for y in 0..height {
            for x in 0..width {
                let Some(pixel) = canvas.pixel(x, y) else {
                    continue;
                };
                let min = origin + egui::vec2(x as f32 * pixel_size, y as f32 * pixel_size);
                let rect = egui::Rect::from_min_size(min, egui::vec2(pixel_size, pixel_size));
                painter.rect_filled(rect, 0.0, pixel.fill);
                painter.rect_stroke(rect, 0.0, grid_line);
            }
        }
    });
}
