//! Eigenschaften-Panel für den selektierten Keyframe.

use crate::app::{AppIntent, AppState};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let session = &state.session;

    egui::SidePanel::right("properties")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Keyframe");
            ui.separator();

            let Some(keyframe) = session.selected_keyframe().copied() else {
                ui.label("Kein Keyframe selektiert");
                if session.is_placing() {
                    ui.add_space(6.0);
                    ui.label("Klick in den Plot setzt einen Keyframe,");
                    ui.label("Rechtsklick bricht ab.");
                }
                return;
            };

            let max_slope = state.options.max_slope;
            egui::Grid::new("keyframe_properties")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Frame:");
                    ui.label(keyframe.frame.to_string());
                    ui.end_row();

                    ui.label("Wert:");
                    let mut value = keyframe.value;
                    if ui
                        .add(egui::DragValue::new(&mut value).speed(0.01).fixed_decimals(3))
                        .changed()
                    {
                        events.push(AppIntent::SelectedValueEdited { value });
                    }
                    ui.end_row();

                    ui.label("Steigung:");
                    let mut slope = keyframe.slope;
                    if ui
                        .add(
                            egui::DragValue::new(&mut slope)
                                .speed(0.01)
                                .fixed_decimals(3)
                                .range(-max_slope..=max_slope),
                        )
                        .changed()
                    {
                        events.push(AppIntent::SelectedSlopeEdited { slope });
                    }
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.small("Shift: Wert/Steigung einrasten");
        });

    events
}
