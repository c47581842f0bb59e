//! Toolbar mit den Keyframe-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let session = &state.session;
    let has_keyframes = !session.track().is_empty();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let add_btn = egui::Button::new("Add keyframe").selected(session.is_placing());
            if ui
                .add(add_btn)
                .on_hover_text("Nächster Klick in den Plot setzt einen Keyframe (N)")
                .clicked()
            {
                events.push(AppIntent::AddKeyframeRequested);
            }

            if ui
                .add_enabled(
                    session.selected().is_some() || session.is_placing(),
                    egui::Button::new("Delete selected keyframe"),
                )
                .on_hover_text("Entf")
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            if ui.button("Clear all keyframes").clicked() {
                events.push(AppIntent::ClearAllRequested);
            }

            if ui
                .add_enabled(has_keyframes, egui::Button::new("Copy to clipboard"))
                .on_hover_text("Strg+C")
                .clicked()
            {
                events.push(AppIntent::CopyToClipboardRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Optionen").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                }
            });
        });
    });

    events
}
