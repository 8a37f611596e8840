use eframe::egui;
use crate::tools::Tool;

pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::LIGHT_GRAY
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(40)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );
        }

        response.on_hover_text(self.tool.name())
    }
}
