//! Selektions-Phasen: Treffer unter dem Zeiger, Deselektion außerhalb, Drag-Start.

use super::geometry::tangent_handle_position;
use super::{CurveSession, InteractionState, PointerInput, TangentSide};
use crate::shared::EditorOptions;

impl CurveSession {
    /// Phase 1: Primärklick auf einen sichtbaren Keyframe selektiert ihn.
    ///
    /// Im Platzier-Modus wird nicht selektiert; der Klick gehört der Platzierung.
    pub(super) fn select_under_pointer(&mut self, input: &PointerInput, options: &EditorOptions) {
        if !input.primary_pressed || self.state.is_placing() {
            return;
        }

        let frame_count = self.mapper.frame_count();
        let hit = self.track.iter().position(|kf| {
            kf.frame <= frame_count
                && self.mapper.coord_to_screen(kf.position()).distance(input.pos)
                    < options.hit_radius_px
        });

        if let Some(key) = hit.and_then(|index| self.track.handle_at(index)) {
            log::debug!("Keyframe {} selektiert", key.index());
            self.state = InteractionState::Selected { key };
        }
    }

    /// Phase 2: Selektion auf ausgeblendetem oder ungültigem Keyframe aufheben.
    pub(super) fn deselect_offscreen(&mut self) {
        let Some(key) = self.state.selected() else {
            return;
        };
        let visible = self
            .track
            .get(key)
            .is_some_and(|kf| kf.frame <= self.mapper.frame_count());
        if !visible {
            log::debug!("Selektion aufgehoben: Keyframe nicht mehr sichtbar");
            self.state = InteractionState::Idle;
        }
    }

    /// Phase 3: Primärklick bei bestehender Selektion startet einen Drag.
    ///
    /// Ein Klick im Plot startet den Wert-Drag; liegt er auf einem
    /// Tangenten-Griff, gewinnt der Tangenten-Drag.
    pub(super) fn begin_drag(&mut self, input: &PointerInput, options: &EditorOptions) {
        if !input.primary_pressed {
            return;
        }
        let Some(key) = self.state.selected() else {
            return;
        };

        if self.mapper.contains(input.pos) {
            self.state = InteractionState::DraggingValue {
                key,
                pixels_moved: 0.0,
            };
        }

        let Some(keyframe) = self.track.get(key) else {
            return;
        };
        let handle_radius = options.handle_hit_radius_px();
        for side in [TangentSide::Left, TangentSide::Right] {
            let handle = tangent_handle_position(&self.mapper, keyframe, side);
            if handle.distance(input.pos) < handle_radius {
                log::debug!("Tangenten-Drag gestartet ({:?})", side);
                self.state = InteractionState::AdjustingTangent { key, side };
                break;
            }
        }
    }
}
