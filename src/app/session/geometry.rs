//! Geometrie-Helfer: Tangenten-Griffe und Steigung aus Bildschirmvektoren.

use super::TangentSide;
use crate::core::{GraphMapper, Keyframe};
use glam::Vec2;

/// Bildschirmposition eines Tangenten-Griffs.
///
/// Der Vektor `(1, slope)` wird durch den Mapper projiziert, normiert und
/// auf eine Frame-Breite skaliert. Links = Position + Delta, rechts = Position − Delta.
pub fn tangent_handle_position(mapper: &GraphMapper, keyframe: &Keyframe, side: TangentSide) -> Vec2 {
    let screen_pos = mapper.coord_to_screen(keyframe.position());
    let slope_dir = Vec2::new(1.0, keyframe.slope);
    let delta = (mapper.coord_to_screen(keyframe.position() - slope_dir) - screen_pos)
        .normalize_or_zero()
        * mapper.frame_width();
    match side {
        TangentSide::Left => screen_pos + delta,
        TangentSide::Right => screen_pos - delta,
    }
}

/// Steigung im Kurvenraum aus einem Bildschirm-Richtungsvektor.
///
/// `run = dx / frame_width`, `rise = -dy / height * y_range`.
/// Senkrechte Vektoren ergeben `±max_slope`, ein Nullvektor `None`.
pub fn slope_from_screen_delta(delta: Vec2, mapper: &GraphMapper, max_slope: f32) -> Option<f32> {
    let run = delta.x / mapper.frame_width();
    let rise = -delta.y / mapper.height() * mapper.y_range();

    if run.abs() < f32::EPSILON {
        if rise == 0.0 {
            return None;
        }
        return Some(max_slope.copysign(rise));
    }

    Some((rise / run).clamp(-max_slope, max_slope))
}

/// Rundet eine Steigung auf eine Nachkommastelle.
pub fn snap_slope(slope: f32) -> f32 {
    (slope * 10.0).round() / 10.0
}
