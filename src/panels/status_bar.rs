use egui::Color32;

use crate::PaintApp;

pub fn status_bar(app: &PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match app.pointer_location() {
                Some(pos) => ui.label(format!("({},{})", pos.x as i32, pos.y as i32)),
                None => ui.label(""),
            };

            if let Some(err) = app.last_error() {
                ui.separator();
                ui.colored_label(Color32::RED, err.to_string());
            }
        });
    });
}
