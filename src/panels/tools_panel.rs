use crate::PaintApp;
use crate::tool::ToolKind;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let heading = ui.heading("Tools");
                app.requests().set_toolbox_top(heading.rect.top());

                // Serve scroll requests aimed at the toolbox
                if app.requests().take_scroll_target().is_some() {
                    heading.scroll_to_me(Some(egui::Align::TOP));
                }

                for tool in ToolKind::ALL {
                    let pressed = app.toolbox().drawing_tool().is_pressed(tool);
                    if ui.selectable_label(pressed, tool.name()).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.toolbox_mut().drawing_tool_mut().select_tool(tool);
                    }
                }

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Color");
                    let mut color = app.toolbox().drawing_tool().color();
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut color,
                        egui::color_picker::Alpha::Opaque,
                    )
                    .changed()
                    {
                        app.pick_color(color);
                    }
                });
            });
        });
}
