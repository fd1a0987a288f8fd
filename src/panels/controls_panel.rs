use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::PaintApp;
use crate::style::ShapeKind;

/// Width of the two numeric text fields, roughly two digits
const NUMBER_FIELD_WIDTH: f32 = 28.0;

pub fn controls_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Clear").clicked() {
                log::debug!("Clear pressed");
                app.clear();
            }
            let can_undo = app.canvas().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }

            let form = app.style_form_mut();

            ui.label("Shape:");
            egui::ComboBox::from_id_salt("shape_kind")
                .selected_text(form.shape_kind.name())
                .show_ui(ui, |ui| {
                    for kind in ShapeKind::ALL {
                        ui.selectable_value(&mut form.shape_kind, kind, kind.name());
                    }
                });

            ui.checkbox(&mut form.filled, "Filled");
            ui.checkbox(&mut form.use_gradient, "Use Gradient");

            ui.label("1st Color:");
            color_edit_button_srgba(ui, &mut form.first_color, Alpha::Opaque);
            ui.label("2nd Color:");
            color_edit_button_srgba(ui, &mut form.second_color, Alpha::Opaque);

            ui.label("Line Width:");
            ui.add(
                egui::TextEdit::singleline(&mut form.stroke_width_text)
                    .desired_width(NUMBER_FIELD_WIDTH),
            );
            ui.label("Dash Length:");
            ui.add(
                egui::TextEdit::singleline(&mut form.dash_length_text)
                    .desired_width(NUMBER_FIELD_WIDTH),
            );
            ui.checkbox(&mut form.dashed, "Dashed");
        });
    });
}
