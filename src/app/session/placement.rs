//! Platzier-Phasen: Vorschau, Einfügen, globaler Abbruch.

use super::{CurveSession, InteractionState, PointerInput};
use crate::core::Keyframe;
use glam::Vec2;

impl CurveSession {
    /// Phase 7: Vorschau aktualisieren, Primärklick fügt einen Keyframe ein.
    ///
    /// Der Frame wird auf den nächsten ganzen Frame gerundet, der Wert folgt
    /// dem Zeiger (mit Snap auf den nächsten Werte-Tick).
    pub(super) fn update_placement(&mut self, input: &PointerInput) {
        let InteractionState::PlacingNew { ghost } = &mut self.state else {
            return;
        };
        if input.secondary_pressed {
            return;
        }
        if !self.mapper.contains(input.pos) {
            *ghost = None;
            return;
        }

        let frame_count = i64::from(self.mapper.frame_count());
        let frame = self.mapper.frame_at_screen_x(input.pos.x).clamp(0, frame_count) as u32;
        let x = self.mapper.coord_to_screen(Vec2::new(frame as f32, 0.0)).x;
        let y = if input.snap {
            self.mapper.snap_y_to_tick(input.pos.y)
        } else {
            input.pos.y
        };
        let preview = Vec2::new(x, y);
        *ghost = Some(preview);

        if !input.primary_pressed {
            return;
        }
        let value = self.mapper.screen_to_coord(preview).y;
        match self.track.insert(Keyframe::new(frame, value, 0.0)) {
            Ok(key) => {
                log::info!("Keyframe eingefügt: Frame {}, Wert {:.3}", frame, value);
                self.state = InteractionState::Selected { key };
            }
            Err(e) => log::debug!("Keyframe nicht eingefügt: {}", e),
        }
    }

    /// Phase 8: Sekundärklick bricht alles ab (Selektion und Platzier-Modus).
    pub(super) fn cancel_on_secondary(&mut self, input: &PointerInput) {
        if input.secondary_pressed && self.state != InteractionState::Idle {
            log::debug!("Interaktion per Sekundärklick abgebrochen");
            self.state = InteractionState::Idle;
        }
    }
}
