//! Interaktionszustand und Eingabe-Snapshot der Kurven-Session.

use crate::core::KeyframeHandle;
use glam::Vec2;

/// Welcher Tangenten-Griff wird bearbeitet?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TangentSide {
    /// Griff einen Frame vor dem Keyframe
    Left,
    /// Griff einen Frame nach dem Keyframe
    Right,
}

/// Zustandsmaschine der Kurven-Interaktion.
///
/// Alle Varianten mit `key` gelten als „selektiert“; die Selektion
/// bleibt beim Loslassen eines Drags erhalten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Nichts selektiert
    #[default]
    Idle,
    /// Keyframe selektiert, keine laufende Bearbeitung
    Selected { key: KeyframeHandle },
    /// Wert des Keyframes wird per Drag verändert
    DraggingValue {
        key: KeyframeHandle,
        /// Aufsummierte vertikale Bewegung seit Drag-Start
        pixels_moved: f32,
    },
    /// Tangente wird über einen Griff verändert
    AdjustingTangent {
        key: KeyframeHandle,
        side: TangentSide,
    },
    /// Nächster Primärklick setzt einen neuen Keyframe
    PlacingNew {
        /// Vorschau-Position (None außerhalb des Plots)
        ghost: Option<Vec2>,
    },
}

impl InteractionState {
    /// Aktuell selektierter Keyframe (auch während Drag/Tangenten-Bearbeitung).
    pub fn selected(&self) -> Option<KeyframeHandle> {
        match *self {
            Self::Selected { key }
            | Self::DraggingValue { key, .. }
            | Self::AdjustingTangent { key, .. } => Some(key),
            Self::Idle | Self::PlacingNew { .. } => None,
        }
    }

    /// Ob der Platzier-Modus aktiv ist.
    pub fn is_placing(&self) -> bool {
        matches!(self, Self::PlacingNew { .. })
    }

    /// Vorschau-Position im Platzier-Modus.
    pub fn ghost(&self) -> Option<Vec2> {
        match *self {
            Self::PlacingNew { ghost } => ghost,
            _ => None,
        }
    }

    /// Ob gerade ein Wert- oder Tangenten-Drag läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Self::DraggingValue { .. } | Self::AdjustingTangent { .. }
        )
    }
}

/// Eingabe-Snapshot eines Ticks in Bildschirmkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    /// Zeigerposition
    pub pos: Vec2,
    /// Zeigerbewegung seit dem letzten Tick
    pub delta: Vec2,
    /// Primärtaste in diesem Tick gedrückt
    pub primary_pressed: bool,
    /// Primärtaste in diesem Tick losgelassen
    pub primary_released: bool,
    /// Primärtaste gehalten
    pub primary_down: bool,
    /// Sekundärtaste in diesem Tick gedrückt
    pub secondary_pressed: bool,
    /// Snap-Modifier gehalten
    pub snap: bool,
}

impl PointerInput {
    /// Zeiger ohne Tastenereignis an `pos`.
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Primärtaste in diesem Tick gedrückt oder weiterhin gehalten.
    pub fn primary_held(&self) -> bool {
        self.primary_pressed || self.primary_down
    }
}
