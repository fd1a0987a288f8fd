use egui::Color32;

use crate::PaintApp;

const CANVAS_BACKGROUND: Color32 = Color32::LIGHT_GRAY;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(CANVAS_BACKGROUND))
        .show(ctx, |ui| {
            // Create a painting area that fills the remaining space
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_canvas_input(ctx, canvas_rect, response.layer_id);
            app.render_canvas(&painter, canvas_rect);
        });
}
