//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Keyframes: {} | Frames: {}",
                state.keyframe_count(),
                state.session.mapper().frame_count()
            ));

            ui.separator();

            ui.label(format!("Modus: {}", mode_label(state.session.state())));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

/// Anzeigetext für den Interaktionszustand.
fn mode_label(state: InteractionState) -> &'static str {
    match state {
        InteractionState::Idle => "Bereit",
        InteractionState::Selected { .. } => "Keyframe selektiert",
        InteractionState::DraggingValue { .. } => "Wert ziehen",
        InteractionState::AdjustingTangent { .. } => "Tangente ziehen",
        InteractionState::PlacingNew { .. } => "Keyframe platzieren (Rechtsklick bricht ab)",
    }
}

#[cfg(test)]
mod tests {
    use super::mode_label;
    use crate::app::InteractionState;

    #[test]
    fn mode_label_names_placing_cancel_hint() {
        assert_eq!(mode_label(InteractionState::Idle), "Bereit");
        assert!(mode_label(InteractionState::PlacingNew { ghost: None }).contains("Rechtsklick"));
    }
}
