//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{GraphMapper, GridLayout, KeyframeTrack};
use crate::shared::{EditorOptions, RenderScene, TextAnchor};
use glam::Vec2;

/// Strichstärke der Achsen.
const AXIS_WIDTH: f32 = 3.0;
/// Strichstärke der Rasterlinien.
const GRID_WIDTH: f32 = 1.0;
/// Strichstärke von Ticks, Kurve und Tangentenlinie.
const STROKE_WIDTH: f32 = 2.0;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let session = &state.session;
    let mapper = session.mapper();

    let mut scene = RenderScene::new(options.background_color);
    push_axes_and_grid(&mut scene, mapper, options);
    push_curve(&mut scene, session.track(), mapper, options);

    let selected = session.selected();
    for (index, keyframe) in session.track().iter().enumerate() {
        if keyframe.frame > mapper.frame_count() {
            continue;
        }
        let is_selected = selected.is_some_and(|key| key.index() == index);
        let center = mapper.coord_to_screen(keyframe.position());
        let color = if is_selected {
            options.keyframe_selected_color
        } else {
            options.keyframe_color
        };
        scene.circle(center, options.keyframe_radius_px, color);
    }

    if let Some((left, right)) = selected.and_then(|key| session.tangent_handle_positions(key)) {
        scene.line(left, right, STROKE_WIDTH, options.keyframe_color);
        scene.circle(left, options.keyframe_radius_px, options.handle_color);
        scene.circle(right, options.keyframe_radius_px, options.handle_color);
    }

    if let Some(ghost) = session.ghost() {
        scene.circle(ghost, options.keyframe_radius_px, options.ghost_color);
    }

    scene
}

fn push_axes_and_grid(scene: &mut RenderScene, mapper: &GraphMapper, options: &EditorOptions) {
    let (top, left) = (mapper.top(), mapper.left());
    let (bottom, right) = (mapper.bottom(), mapper.right());

    // Zeitachse und y-Achse
    scene.line(
        Vec2::new(left, bottom),
        Vec2::new(right, bottom),
        AXIS_WIDTH,
        options.axis_color,
    );
    scene.line(
        Vec2::new(left, top),
        Vec2::new(left, bottom),
        AXIS_WIDTH,
        options.axis_color,
    );

    let grid = GridLayout::compute(mapper);
    for line in grid.frame_lines.iter().chain(grid.value_lines.iter()) {
        let color = if line.major {
            options.grid_major_color
        } else {
            options.grid_minor_color
        };
        scene.line(line.from, line.to, GRID_WIDTH, color);
    }

    for tick in &grid.frame_ticks {
        scene.line(tick.from, tick.to, STROKE_WIDTH, options.grid_major_color);
        scene.text(
            tick.label_pos,
            tick.label.as_str(),
            TextAnchor::Center,
            options.label_font_size,
            options.axis_color,
        );
    }
    for tick in &grid.value_ticks {
        scene.line(tick.from, tick.to, STROKE_WIDTH, options.grid_major_color);
        scene.text(
            tick.label_pos,
            tick.label.as_str(),
            TextAnchor::RightCenter,
            options.label_font_size,
            options.axis_color,
        );
    }
}

/// Tastet die Kurve pixelweise vom linken Plotrand bis zum letzten Keyframe ab.
fn push_curve(
    scene: &mut RenderScene,
    track: &KeyframeTrack,
    mapper: &GraphMapper,
    options: &EditorOptions,
) {
    let Some(last) = track.as_slice().last() else {
        return;
    };
    let step = options.curve_sample_step_px.max(0.1);
    let end_x = mapper.coord_to_screen(last.position()).x;
    let screen_y = |value: f32| mapper.coord_to_screen(Vec2::new(0.0, value)).y;

    let mut points = vec![Vec2::new(mapper.left(), screen_y(track.evaluate(0.0)))];
    let mut x = mapper.left() + step;
    while x < mapper.right() + step / 2.0 && x < end_x {
        let frame = mapper.screen_to_coord(Vec2::new(x, 0.0)).x;
        points.push(Vec2::new(x, screen_y(track.evaluate(frame))));
        x += step;
    }

    if points.len() >= 2 {
        scene.polyline(points, STROKE_WIDTH, options.curve_color);
    }
}
