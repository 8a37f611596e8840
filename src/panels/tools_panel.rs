use crate::PaintApp;
use crate::brush::BrushStyle;
use crate::command::Command;
use crate::components::ToolButton;
use crate::config::{PALETTE, WIDTH_PRESETS};
use crate::tools::Tool;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let settings = app.canvas().settings().clone();

            ui.horizontal_wrapped(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, settings.tool == tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.set_tool(tool);
                    }
                }
            });
            ui.separator();

            // Picking a brush switches to the pen
            egui::ComboBox::from_label("Brush")
                .selected_text(settings.brush.name())
                .show_ui(ui, |ui| {
                    for brush in BrushStyle::ALL {
                        if ui.selectable_label(settings.brush == brush, brush.name()).clicked() {
                            app.set_tool(Tool::Pen);
                            app.set_brush(brush);
                        }
                    }
                });

            egui::ComboBox::from_label("Stroke")
                .selected_text(settings.width.to_string())
                .show_ui(ui, |ui| {
                    for width in WIDTH_PRESETS {
                        let selected = settings.width == width;
                        if ui.selectable_label(selected, width.to_string()).clicked() {
                            app.set_width(width);
                        }
                    }
                });
            ui.separator();

            ui.label("Color");
            ui.horizontal_wrapped(|ui| {
                for color in PALETTE {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::click());
                    ui.painter().rect_filled(rect, 2.0, color);
                    if color == settings.color {
                        let outline = egui::Stroke::new(2.0, egui::Color32::LIGHT_GRAY);
                        ui.painter().rect_stroke(rect, 2.0, outline);
                    }
                    if response.clicked() {
                        app.set_color(color);
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Custom:");
                let mut color = settings.color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.set_color(color);
                }
            });
            ui.separator();

            ui.label("Text to place:");
            ui.text_edit_singleline(app.text_input_mut());
            ui.separator();

            ui.horizontal(|ui| {
                let history = app.canvas().history();
                let can_undo = history.can_undo();
                let can_redo = history.can_redo();
                let can_clear = !app.canvas().scene().is_empty();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.execute(Command::Redo);
                }
                if ui.add_enabled(can_clear, egui::Button::new("Clear")).clicked() {
                    app.execute(Command::Clear);
                }
            });

            let history = app.canvas().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });
            ui.label(format!("Strokes: {}", app.canvas().scene().len()));
            ui.separator();

            ui.label("Save as:");
            ui.text_edit_singleline(app.export_path_mut());
            if ui.button("Save").clicked() {
                app.save_image();
            }
            if let Some(status) = app.status() {
                ui.label(status);
            }
        });
}
