//! Überträgt `DrawCommand`s einer `RenderScene` auf einen `egui::Painter`.

use crate::shared::{DrawCommand, RenderScene, TextAnchor};
use glam::Vec2;

/// Zeichnet Hintergrund und alle Befehle der Szene in Reihenfolge.
pub fn paint_scene(painter: &egui::Painter, scene: &RenderScene) {
    painter.rect_filled(painter.clip_rect(), 0.0, to_color32(scene.background));

    for command in &scene.commands {
        match command {
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [to_pos2(*from), to_pos2(*to)],
                    egui::Stroke::new(*width, to_color32(*color)),
                );
            }
            DrawCommand::Polyline {
                points,
                width,
                color,
            } => {
                let points = points.iter().copied().map(to_pos2).collect();
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(*width, to_color32(*color)),
                ));
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(to_pos2(*center), *radius, to_color32(*color));
            }
            DrawCommand::Text {
                pos,
                text,
                anchor,
                size,
                color,
            } => {
                painter.text(
                    to_pos2(*pos),
                    to_align(*anchor),
                    text,
                    egui::FontId::proportional(*size),
                    to_color32(*color),
                );
            }
        }
    }
}

/// RGBA `[0, 1]` → `Color32`.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn to_align(anchor: TextAnchor) -> egui::Align2 {
    match anchor {
        TextAnchor::Center => egui::Align2::CENTER_CENTER,
        TextAnchor::RightCenter => egui::Align2::RIGHT_CENTER,
        TextAnchor::LeftCenter => egui::Align2::LEFT_CENTER,
    }
}
