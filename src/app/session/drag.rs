//! Drag-Phasen: Wert verschieben, Tangente drehen, Loslassen.

use super::geometry::{slope_from_screen_delta, snap_slope};
use super::{CurveSession, InteractionState, PointerInput};
use crate::shared::EditorOptions;
use glam::Vec2;

impl CurveSession {
    /// Phase 4: Wert-Drag, greift erst nach `drag_threshold_px` vertikaler Bewegung.
    pub(super) fn drag_value(&mut self, input: &PointerInput, options: &EditorOptions) {
        if !input.primary_held() {
            return;
        }
        let InteractionState::DraggingValue { key, pixels_moved } = &mut self.state else {
            return;
        };
        *pixels_moved += input.delta.y.abs();
        if *pixels_moved <= options.drag_threshold_px {
            return;
        }
        let key = *key;

        let y = if input.snap {
            self.mapper.snap_y_to_tick(input.pos.y)
        } else {
            input.pos.y
        };
        let value = self.mapper.screen_to_coord(Vec2::new(input.pos.x, y)).y;
        if let Err(e) = self.track.set_value(key, value) {
            log::warn!("Wert-Drag abgebrochen: {}", e);
            self.state = InteractionState::Idle;
        }
    }

    /// Phase 5: Tangenten-Drag setzt die Steigung aus der Zeigerrichtung.
    pub(super) fn adjust_tangent(&mut self, input: &PointerInput, options: &EditorOptions) {
        if !input.primary_held() {
            return;
        }
        let InteractionState::AdjustingTangent { key, .. } = self.state else {
            return;
        };
        let Some(keyframe) = self.track.get(key) else {
            self.state = InteractionState::Idle;
            return;
        };

        let origin = self.mapper.coord_to_screen(keyframe.position());
        let Some(slope) = slope_from_screen_delta(input.pos - origin, &self.mapper, options.max_slope)
        else {
            // Zeiger genau auf dem Keyframe: Richtung undefiniert
            return;
        };
        let slope = if input.snap { snap_slope(slope) } else { slope };

        if let Err(e) = self.track.set_slope(key, slope) {
            log::warn!("Tangenten-Drag abgebrochen: {}", e);
            self.state = InteractionState::Idle;
        }
    }

    /// Phase 6: Loslassen beendet jeden Drag, die Selektion bleibt.
    ///
    /// Ein Tick ohne gehaltene Taste zählt ebenfalls als Loslassen
    /// (z.B. wenn das Release-Event außerhalb des Fensters verloren ging).
    pub(super) fn release_drag(&mut self, input: &PointerInput) {
        if !input.primary_released && input.primary_held() {
            return;
        }
        match self.state {
            InteractionState::DraggingValue { key, .. }
            | InteractionState::AdjustingTangent { key, .. } => {
                self.state = InteractionState::Selected { key };
            }
            _ => {}
        }
    }
}
