use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Show the canvas one texel per physical pixel
        let [width, height] = app.canvas_size();
        let ppp = ctx.pixels_per_point();
        let size = egui::vec2(width as f32 / ppp, height as f32 / ppp);
        let (canvas_rect, _response) = ui.allocate_exact_size(size, egui::Sense::drag());

        app.handle_input(ctx, canvas_rect);

        let texture = app.canvas_texture(ctx);
        ui.painter().image(
            texture.id(),
            canvas_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    });
}
