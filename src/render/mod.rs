//! Zeichnen der Render-Szene mit dem egui-Painter.

mod painter;

pub use crate::shared::RenderScene;
pub use painter::paint_scene;
