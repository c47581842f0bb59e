//! Handler für die Zeitachse.

use crate::app::AppState;

/// Setzt die Anzahl sichtbarer Frames.
pub fn set_frame_count(state: &mut AppState, frame_count: u32) {
    state.session.set_frame_count(frame_count);
    log::debug!("Frame-Anzahl: {}", state.session.mapper().frame_count());
}
