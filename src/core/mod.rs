//! Core-Domänentypen: Keyframes, Hermite-Interpolation, Koordinaten-Abbildung, Raster.

pub mod graph_mapper;
pub mod grid;
pub mod hermite;
/// Keyframe-Datenmodell
///
/// - Keyframe: Stützstelle mit Frame, Wert und Steigung
/// - KeyframeTrack: sortierte, frame-eindeutige Sammlung
/// - KeyframeHandle: generationsgeprüfter Verweis in die Sammlung
pub mod keyframe;

pub use graph_mapper::{GraphMapper, PlotBounds};
pub use grid::{AxisTick, GridLayout, GridLine};
pub use hermite::evaluate;
pub use keyframe::{Keyframe, KeyframeError, KeyframeHandle, KeyframeTrack};
