//! Handler für Zeichenfläche und Zeiger-Interaktion.

use crate::app::session::PointerInput;
use crate::app::AppState;

/// Übernimmt die Zeichenfläche und passt die Plot-Grenzen an.
pub fn set_canvas_rect(state: &mut AppState, canvas: [f32; 4]) {
    let bounds = state.options.plot_bounds(canvas);
    state.session.resize(bounds);
}

/// Schickt einen Zeiger-Snapshot durch die Session.
pub fn process_pointer(state: &mut AppState, input: &PointerInput) {
    state.session.update(input, &state.options);
}

/// Hebt Selektion und Platzier-Modus auf.
pub fn cancel(state: &mut AppState) {
    state.session.cancel();
}
