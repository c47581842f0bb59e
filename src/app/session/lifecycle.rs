//! Befehle außerhalb des Tick-Ablaufs: Platzieren, Löschen, Frame-Anzahl, Export.

use super::{CurveSession, InteractionState};
use crate::core::{GraphMapper, Keyframe};
use crate::xml::write_keyframe_export;

impl CurveSession {
    /// Aktiviert den Platzier-Modus; eine bestehende Selektion wird aufgehoben.
    pub fn begin_placing(&mut self) {
        log::debug!("Platzier-Modus aktiviert");
        self.state = InteractionState::PlacingNew { ghost: None };
    }

    /// Bricht jede Interaktion ab.
    pub fn cancel(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Entfernt den selektierten Keyframe und beendet den Platzier-Modus.
    ///
    /// Ohne Selektion bleibt der Track unverändert.
    pub fn delete_selected(&mut self) -> Option<Keyframe> {
        let key = self.state.selected();
        self.state = InteractionState::Idle;
        let key = key?;
        let removed = self.track.remove(key);
        if let Some(kf) = &removed {
            log::info!("Keyframe gelöscht: Frame {}", kf.frame);
        }
        removed
    }

    /// Entfernt alle Keyframes und hebt Selektion und Platzier-Modus auf.
    pub fn clear_all(&mut self) {
        if !self.track.is_empty() {
            log::info!("Alle {} Keyframes entfernt", self.track.len());
        }
        self.track.clear();
        self.state = InteractionState::Idle;
    }

    /// Setzt die Anzahl sichtbarer Frames (min. 1).
    pub fn set_frame_count(&mut self, frame_count: u32) {
        self.mapper.set_frame_count(frame_count);
        self.deselect_offscreen();
    }

    /// Zeigt einen Frame mehr an.
    pub fn increase_frame_count(&mut self) {
        self.set_frame_count(self.mapper.frame_count().saturating_add(1));
    }

    /// Zeigt einen Frame weniger an; unterhalb des Minimums: No-Op.
    pub fn decrease_frame_count(&mut self) {
        let current = self.mapper.frame_count();
        if current > GraphMapper::FRAME_COUNT_MIN {
            self.set_frame_count(current - 1);
        }
    }

    /// Übernimmt Wertebereich und Tick-Anzahl; Grenzen und Frame-Anzahl bleiben.
    pub fn apply_axes(&mut self, y_range: f32, y_tick_count: u32) {
        self.mapper = GraphMapper::new(
            self.mapper.bounds(),
            y_range,
            y_tick_count,
            self.mapper.frame_count(),
        );
    }

    /// Setzt den Wert des selektierten Keyframes. Gibt zurück, ob etwas geändert wurde.
    pub fn set_selected_value(&mut self, value: f32) -> bool {
        match self.state.selected() {
            Some(key) => self.track.set_value(key, value).is_ok(),
            None => false,
        }
    }

    /// Setzt die Steigung des selektierten Keyframes. Gibt zurück, ob etwas geändert wurde.
    pub fn set_selected_slope(&mut self, slope: f32) -> bool {
        match self.state.selected() {
            Some(key) => self.track.set_slope(key, slope).is_ok(),
            None => false,
        }
    }

    /// Export-Text aller Keyframes; `None` bei leerem Track.
    pub fn export_text(&self) -> Option<String> {
        if self.track.is_empty() {
            return None;
        }
        Some(write_keyframe_export(self.track.as_slice()))
    }
}
