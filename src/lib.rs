//! Hermite-Keyframe-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;
pub mod xml;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveSession, InteractionState, PointerInput,
    TangentSide, UiState,
};
pub use core::{
    GraphMapper, GridLayout, Keyframe, KeyframeError, KeyframeHandle, KeyframeTrack, PlotBounds,
};
pub use shared::{EditorOptions, RenderScene};
pub use xml::write_keyframe_export;
