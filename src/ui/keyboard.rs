//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_delete_pressed, key_escape_pressed, key_n_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::N),
        )
    });

    // Strg+C kommt je nach Plattform als Copy-Event oder als Tastendruck
    let (copy_requested, key_plus_pressed, key_minus_pressed) = ui.input(|i| {
        (
            i.events.iter().any(|e| matches!(e, egui::Event::Copy))
                || (modifiers.command && i.key_pressed(egui::Key::C)),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if key_delete_pressed {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    if copy_requested {
        events.push(AppIntent::CopyToClipboardRequested);
    }

    if key_n_pressed && !modifiers.command {
        events.push(AppIntent::AddKeyframeRequested);
    }

    if key_plus_pressed && !modifiers.command {
        events.push(AppIntent::IncreaseFrameCountRequested);
    }

    if key_minus_pressed && !modifiers.command {
        events.push(AppIntent::DecreaseFrameCountRequested);
    }

    events
}
