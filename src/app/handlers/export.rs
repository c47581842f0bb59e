//! Handler für den Keyframe-Export.

use crate::app::AppState;

/// Erzeugt den XML-Export für die Zwischenablage.
///
/// Bei leerem Track wird nichts kopiert.
pub fn copy_to_clipboard(state: &mut AppState) {
    let Some(text) = state.session.export_text() else {
        log::debug!("Kopieren ignoriert: keine Keyframes");
        return;
    };
    let count = state.keyframe_count();
    log::info!("{} Keyframes in die Zwischenablage kopiert", count);
    state.ui.status_message = Some(format!("{} Keyframes kopiert", count));
    state.clipboard_text = Some(text);
}
