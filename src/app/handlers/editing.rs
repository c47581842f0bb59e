//! Handler für Keyframe-Editing.

use crate::app::AppState;

/// Aktiviert den Platzier-Modus für einen neuen Keyframe.
pub fn begin_placing(state: &mut AppState) {
    state.session.begin_placing();
}

/// Löscht den selektierten Keyframe und beendet den Platzier-Modus.
pub fn delete_selected(state: &mut AppState) {
    if state.session.delete_selected().is_none() {
        log::debug!("Löschen ignoriert: kein Keyframe selektiert");
    }
}

/// Entfernt alle Keyframes.
pub fn clear_all(state: &mut AppState) {
    state.session.clear_all();
    state.ui.status_message = None;
}

/// Setzt den Wert des selektierten Keyframes.
pub fn set_selected_value(state: &mut AppState, value: f32) {
    if !state.session.set_selected_value(value) {
        log::debug!("Wert ignoriert: kein Keyframe selektiert");
    }
}

/// Setzt die Steigung des selektierten Keyframes (begrenzt auf `max_slope`).
pub fn set_selected_slope(state: &mut AppState, slope: f32) {
    let max_slope = state.options.max_slope;
    if !state
        .session
        .set_selected_slope(slope.clamp(-max_slope, max_slope))
    {
        log::debug!("Steigung ignoriert: kein Keyframe selektiert");
    }
}
