//! Keyframes und die sortierte Keyframe-Spur.
//!
//! `KeyframeTrack` hält die Keyframes stets aufsteigend nach Frame sortiert
//! und frame-eindeutig. Verweise von außen laufen über `KeyframeHandle`,
//! die bei jeder strukturellen Mutation ungültig werden.

use glam::Vec2;
use thiserror::Error;

/// Stützstelle der Kurve: Frame, Wert und Tangenten-Steigung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Frame-Index (eindeutig innerhalb einer Spur)
    pub frame: u32,
    /// Kurvenwert an diesem Frame
    pub value: f32,
    /// Hermite-Tangente (Wertänderung pro Frame)
    pub slope: f32,
}

impl Keyframe {
    /// Erstellt einen neuen Keyframe.
    pub fn new(frame: u32, value: f32, slope: f32) -> Self {
        Self {
            frame,
            value,
            slope,
        }
    }

    /// Position im Kurvenraum (x = Frame, y = Wert).
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.frame as f32, self.value)
    }
}

/// Generationsgeprüfter Verweis auf einen Keyframe einer `KeyframeTrack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyframeHandle {
    index: usize,
    generation: u64,
}

impl KeyframeHandle {
    /// Index in der Spur zum Zeitpunkt der Erstellung.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Fehler beim Bearbeiten einer Keyframe-Spur.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyframeError {
    /// An diesem Frame existiert bereits ein Keyframe
    #[error("an Frame {frame} existiert bereits ein Keyframe")]
    DuplicateFrame { frame: u32 },
    /// Der Handle stammt aus einer älteren Generation der Spur
    #[error("veralteter Keyframe-Handle")]
    StaleHandle,
}

/// Sortierte, frame-eindeutige Keyframe-Sammlung.
#[derive(Debug, Clone, Default)]
pub struct KeyframeTrack {
    keyframes: Vec<Keyframe>,
    generation: u64,
}

impl KeyframeTrack {
    /// Erstellt eine leere Spur.
    pub fn new() -> Self {
        Self {
            keyframes: Vec::new(),
            generation: 0,
        }
    }

    /// Baut eine Spur aus beliebigen Keyframes; doppelte Frames werden verworfen.
    pub fn from_keyframes(keyframes: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut track = Self::new();
        for keyframe in keyframes {
            if let Err(e) = track.insert(keyframe) {
                log::warn!("Keyframe beim Aufbau verworfen: {}", e);
            }
        }
        track
    }

    /// Fünf Stützstellen über Frame 0–30 (Ease-In-Out).
    pub fn default_seed() -> Self {
        Self::from_keyframes([
            Keyframe::new(0, 1.0, -0.44),
            Keyframe::new(4, 0.53, -0.03),
            Keyframe::new(15, 0.5, 0.0),
            Keyframe::new(26, 0.53, 0.03),
            Keyframe::new(30, 1.0, 0.44),
        ])
    }

    /// Anzahl der Keyframes.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keyframes.iter()
    }

    /// Read-only Sicht in Frame-Reihenfolge.
    pub fn as_slice(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Aktuelle Strukturgeneration (steigt bei Einfügen/Löschen/Leeren).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ermittelt die Einfügeposition für `frame`.
    ///
    /// `None`, wenn bereits ein Keyframe mit diesem Frame existiert.
    /// Sonst der Index des ersten Keyframes mit größerem Frame
    /// (bzw. `len()` zum Anhängen).
    pub fn insertion_index(&self, frame: u32) -> Option<usize> {
        let mut left_index: Option<usize> = None;
        let mut right_index = self.keyframes.len();

        for (i, keyframe) in self.keyframes.iter().enumerate() {
            if keyframe.frame <= frame {
                left_index = Some(i);
            }
            if keyframe.frame >= frame && right_index == self.keyframes.len() {
                right_index = i;
            }
        }

        // Links und rechts zeigen auf denselben Frame → Kollision
        match left_index {
            Some(left) if self.keyframes[left].frame == frame => None,
            _ => Some(right_index),
        }
    }

    /// Fügt einen Keyframe sortiert ein und gibt einen Handle darauf zurück.
    pub fn insert(&mut self, keyframe: Keyframe) -> Result<KeyframeHandle, KeyframeError> {
        let index = self
            .insertion_index(keyframe.frame)
            .ok_or(KeyframeError::DuplicateFrame {
                frame: keyframe.frame,
            })?;
        self.keyframes.insert(index, keyframe);
        self.generation += 1;
        self.handle_at(index).ok_or(KeyframeError::StaleHandle)
    }

    /// Entfernt den Keyframe hinter `handle`; veraltete Handles bewirken nichts.
    pub fn remove(&mut self, handle: KeyframeHandle) -> Option<Keyframe> {
        self.resolve(handle)?;
        let removed = self.keyframes.remove(handle.index);
        self.generation += 1;
        Some(removed)
    }

    /// Entfernt alle Keyframes.
    pub fn clear(&mut self) {
        if self.keyframes.is_empty() {
            return;
        }
        self.keyframes.clear();
        self.generation += 1;
    }

    /// Handle für den Keyframe an `index` in der aktuellen Generation.
    pub fn handle_at(&self, index: usize) -> Option<KeyframeHandle> {
        (index < self.keyframes.len()).then_some(KeyframeHandle {
            index,
            generation: self.generation,
        })
    }

    /// Handle für den Keyframe an einem Frame (Binärsuche).
    pub fn handle_for_frame(&self, frame: u32) -> Option<KeyframeHandle> {
        let index = self
            .keyframes
            .binary_search_by_key(&frame, |kf| kf.frame)
            .ok()?;
        self.handle_at(index)
    }

    fn resolve(&self, handle: KeyframeHandle) -> Option<usize> {
        (handle.generation == self.generation && handle.index < self.keyframes.len())
            .then_some(handle.index)
    }

    /// Liefert den Keyframe hinter `handle` (None bei veraltetem Handle).
    pub fn get(&self, handle: KeyframeHandle) -> Option<&Keyframe> {
        self.resolve(handle).map(|i| &self.keyframes[i])
    }

    /// Setzt den Wert eines Keyframes. Sortierung bleibt unberührt.
    pub fn set_value(&mut self, handle: KeyframeHandle, value: f32) -> Result<(), KeyframeError> {
        let index = self.resolve(handle).ok_or(KeyframeError::StaleHandle)?;
        self.keyframes[index].value = value;
        Ok(())
    }

    /// Setzt die Tangenten-Steigung eines Keyframes.
    pub fn set_slope(&mut self, handle: KeyframeHandle, slope: f32) -> Result<(), KeyframeError> {
        let index = self.resolve(handle).ok_or(KeyframeError::StaleHandle)?;
        self.keyframes[index].slope = slope;
        Ok(())
    }

    /// Interpolierter Kurvenwert an `frame`.
    pub fn evaluate(&self, frame: f32) -> f32 {
        super::hermite::evaluate(&self.keyframes, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(track: &KeyframeTrack) -> Vec<u32> {
        track.iter().map(|kf| kf.frame).collect()
    }

    fn assert_sorted_unique(track: &KeyframeTrack) {
        assert!(
            track.as_slice().windows(2).all(|w| w[0].frame < w[1].frame),
            "Spur nicht streng aufsteigend: {:?}",
            frames(track)
        );
    }

    #[test]
    fn test_default_seed_has_five_sorted_keyframes() {
        let track = KeyframeTrack::default_seed();
        assert_eq!(frames(&track), vec![0, 4, 15, 26, 30]);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut track = KeyframeTrack::default_seed();
        let handle = track.insert(Keyframe::new(10, 0.6, 0.0)).expect("Frame 10 ist frei");
        assert_eq!(frames(&track), vec![0, 4, 10, 15, 26, 30]);
        assert_eq!(track.get(handle).map(|kf| kf.frame), Some(10));
    }

    #[test]
    fn test_insert_duplicate_frame_is_rejected() {
        let mut track = KeyframeTrack::default_seed();
        let generation = track.generation();
        let result = track.insert(Keyframe::new(4, 0.9, 0.0));
        assert_eq!(result, Err(KeyframeError::DuplicateFrame { frame: 4 }));
        assert_eq!(track.len(), 5);
        assert_eq!(track.generation(), generation);
        assert_eq!(track.as_slice()[1].value, 0.53);
    }

    #[test]
    fn test_insertion_index_edges() {
        let track = KeyframeTrack::from_keyframes([
            Keyframe::new(5, 0.0, 0.0),
            Keyframe::new(10, 0.0, 0.0),
        ]);
        assert_eq!(track.insertion_index(0), Some(0));
        assert_eq!(track.insertion_index(7), Some(1));
        assert_eq!(track.insertion_index(11), Some(2));
        assert_eq!(track.insertion_index(5), None);
        assert_eq!(track.insertion_index(10), None);
        assert_eq!(KeyframeTrack::new().insertion_index(3), Some(0));
    }

    #[test]
    fn test_mixed_inserts_and_removes_stay_sorted() {
        let mut track = KeyframeTrack::new();
        for frame in [12, 3, 40, 3, 0, 27, 12, 8, 41, 1] {
            let _ = track.insert(Keyframe::new(frame, frame as f32 * 0.1, 0.0));
            assert_sorted_unique(&track);
        }
        assert_eq!(frames(&track), vec![0, 1, 3, 8, 12, 27, 40, 41]);

        for frame in [8, 0, 41] {
            let handle = track.handle_for_frame(frame).expect("Frame vorhanden");
            assert_eq!(track.remove(handle).map(|kf| kf.frame), Some(frame));
            assert_sorted_unique(&track);
        }
        assert_eq!(frames(&track), vec![1, 3, 12, 27, 40]);
    }

    #[test]
    fn test_from_keyframes_sorts_and_drops_duplicates() {
        let track = KeyframeTrack::from_keyframes([
            Keyframe::new(20, 1.0, 0.0),
            Keyframe::new(5, 2.0, 0.0),
            Keyframe::new(20, 3.0, 0.0),
        ]);
        assert_eq!(frames(&track), vec![5, 20]);
        assert_eq!(track.as_slice()[1].value, 1.0);
    }

    #[test]
    fn test_structural_mutation_invalidates_handles() {
        let mut track = KeyframeTrack::default_seed();
        let handle = track.handle_at(2).expect("Index 2 existiert");
        assert_eq!(track.get(handle).map(|kf| kf.frame), Some(15));

        track.insert(Keyframe::new(10, 0.6, 0.0)).expect("Frame 10 ist frei");
        assert!(track.get(handle).is_none());
        assert!(track.remove(handle).is_none());
        assert_eq!(
            track.set_value(handle, 0.0),
            Err(KeyframeError::StaleHandle)
        );
        assert_eq!(track.len(), 6);
    }

    #[test]
    fn test_value_and_slope_edits_keep_handles_valid() {
        let mut track = KeyframeTrack::default_seed();
        let handle = track.handle_for_frame(26).expect("Frame 26 vorhanden");
        track.set_value(handle, 1.5).expect("Handle gültig");
        track.set_slope(handle, -2.0).expect("Handle gültig");
        assert_eq!(track.get(handle), Some(&Keyframe::new(26, 1.5, -2.0)));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut track = KeyframeTrack::default_seed();
        track.clear();
        assert!(track.is_empty());
        let generation = track.generation();
        track.clear();
        assert!(track.is_empty());
        assert_eq!(track.generation(), generation);
    }
}
