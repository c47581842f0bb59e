//! Kurven-Session: Keyframe-Track, Koordinaten-Abbildung und Interaktionszustand.
//!
//! `update` verarbeitet pro Tick einen `PointerInput` in fester Phasen-Reihenfolge:
//! Selektion → Deselektion außerhalb → Drag-Start → Wert-Drag →
//! Tangenten-Drag → Loslassen → Platzieren → globaler Abbruch.

mod drag;
pub mod geometry;
mod lifecycle;
mod placement;
mod selection;
mod state;


pub use state::{InteractionState, PointerInput, TangentSide};

use crate::core::{GraphMapper, Keyframe, KeyframeHandle, KeyframeTrack, PlotBounds};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Zeichenfläche bis zum ersten Resize (Fenstergröße beim Start).
const INITIAL_CANVAS: [f32; 4] = [0.0, 0.0, 1600.0, 900.0];

/// Eine Editor-Sitzung über genau einem Keyframe-Track.
#[derive(Debug, Clone)]
pub struct CurveSession {
    track: KeyframeTrack,
    mapper: GraphMapper,
    state: InteractionState,
}

impl CurveSession {
    /// Erstellt eine Sitzung aus Track und fertigem Mapper.
    pub fn new(track: KeyframeTrack, mapper: GraphMapper) -> Self {
        Self {
            track,
            mapper,
            state: InteractionState::Idle,
        }
    }

    /// Erstellt eine Sitzung mit Achsen und Rändern aus den Optionen.
    pub fn with_options(track: KeyframeTrack, options: &EditorOptions) -> Self {
        let mapper = GraphMapper::new(
            options.plot_bounds(INITIAL_CANVAS),
            options.y_range,
            options.y_tick_count,
            options.frame_count,
        );
        Self::new(track, mapper)
    }

    /// Verarbeitet einen Eingabe-Tick.
    pub fn update(&mut self, input: &PointerInput, options: &EditorOptions) {
        self.select_under_pointer(input, options);
        self.deselect_offscreen();
        self.begin_drag(input, options);
        self.drag_value(input, options);
        self.adjust_tangent(input, options);
        self.release_drag(input);
        self.update_placement(input);
        self.cancel_on_secondary(input);
    }

    /// Keyframe-Track (read-only).
    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }

    /// Koordinaten-Abbildung (read-only).
    pub fn mapper(&self) -> &GraphMapper {
        &self.mapper
    }

    /// Aktueller Interaktionszustand.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Handle des selektierten Keyframes.
    pub fn selected(&self) -> Option<KeyframeHandle> {
        self.state.selected()
    }

    /// Selektierter Keyframe, falls das Handle noch gültig ist.
    pub fn selected_keyframe(&self) -> Option<&Keyframe> {
        self.selected().and_then(|key| self.track.get(key))
    }

    /// Ob der Platzier-Modus aktiv ist.
    pub fn is_placing(&self) -> bool {
        self.state.is_placing()
    }

    /// Vorschau-Position des Platzier-Modus in Bildschirmkoordinaten.
    pub fn ghost(&self) -> Option<Vec2> {
        self.state.ghost()
    }

    /// Bildschirmpositionen (links, rechts) der Tangenten-Griffe eines Keyframes.
    pub fn tangent_handle_positions(&self, key: KeyframeHandle) -> Option<(Vec2, Vec2)> {
        let keyframe = self.track.get(key)?;
        Some((
            geometry::tangent_handle_position(&self.mapper, keyframe, TangentSide::Left),
            geometry::tangent_handle_position(&self.mapper, keyframe, TangentSide::Right),
        ))
    }

    /// Passt die Plot-Grenzen an eine neue Zeichenfläche an.
    pub fn resize(&mut self, bounds: PlotBounds) {
        if bounds != self.mapper.bounds() {
            self.mapper.resize(bounds);
        }
    }

    /// Interpolierter Kurvenwert an `frame`.
    pub fn evaluate(&self, frame: f32) -> f32 {
        self.track.evaluate(frame)
    }
}
