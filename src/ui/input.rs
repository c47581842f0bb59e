//! Zeichenflächen-Input: egui-Zeigerzustand → `PointerInput`, Tastatur → `AppIntent`.

use super::keyboard;
use crate::app::{AppIntent, PointerInput};
use glam::Vec2;

/// Verwaltet den Input-Zustand der Zeichenfläche über Frames hinweg.
#[derive(Default)]
pub struct InputState {
    /// Letzte bekannte Zeigerposition (für Frames ohne Zeiger über dem Fenster)
    last_pointer_pos: Vec2,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer_pos: Vec2::ZERO,
        }
    }

    /// Sammelt die Events der Zeichenfläche eines Frames.
    ///
    /// Liefert immer `CanvasResized` und `PointerUpdated`, davor die
    /// Tastatur-Shortcuts. Primärklicks zählen nur über der Zeichenfläche.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::CanvasResized {
            canvas: [rect.min.x, rect.min.y, rect.max.x, rect.max.y],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let canvas_hovered = response.hovered();
        let input = ui.input(|i| pointer_input_from(i, self.last_pointer_pos, canvas_hovered));
        self.last_pointer_pos = input.pos;
        events.push(AppIntent::PointerUpdated { input });

        events
    }
}

/// Übersetzt den egui-Zeigerzustand eines Frames in einen `PointerInput`.
pub(crate) fn pointer_input_from(
    input: &egui::InputState,
    fallback_pos: Vec2,
    canvas_hovered: bool,
) -> PointerInput {
    let pointer = &input.pointer;
    let pos = pointer
        .latest_pos()
        .map_or(fallback_pos, |p| Vec2::new(p.x, p.y));
    let delta = pointer.delta();

    PointerInput {
        pos,
        delta: Vec2::new(delta.x, delta.y),
        primary_pressed: canvas_hovered && pointer.primary_pressed(),
        primary_released: pointer.primary_released(),
        primary_down: pointer.primary_down(),
        secondary_pressed: pointer.button_pressed(egui::PointerButton::Secondary),
        snap: input.modifiers.shift || input.modifiers.command,
    }
}
