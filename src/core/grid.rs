//! Raster, Achsen-Ticks und Beschriftungen des Kurvenplots.
//!
//! Reine Funktion von `frame_count`, `y_tick_count` und den Plot-Grenzen.

use super::GraphMapper;
use glam::Vec2;

/// Länge der Tick-Striche in Pixeln.
pub const TICK_LENGTH_PX: f32 = 10.0;
/// Abstand der Frame-Beschriftung unter der Zeitachse.
pub const FRAME_LABEL_OFFSET_PX: f32 = 25.0;
/// Abstand der Wert-Beschriftung links der y-Achse.
pub const VALUE_LABEL_OFFSET_PX: f32 = 20.0;
/// Jede n-te Rasterlinie wird hervorgehoben.
const MAJOR_LINE_INTERVAL: u32 = 5;

/// Eine Rasterlinie quer durch den Plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
    /// Hervorgehobene Linie (jede fünfte)
    pub major: bool,
}

/// Ein Achsen-Tick mit Beschriftung.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Start des Tick-Strichs auf der Achse
    pub from: Vec2,
    /// Ende des Tick-Strichs
    pub to: Vec2,
    /// Ankerpunkt der Beschriftung
    pub label_pos: Vec2,
    pub label: String,
}

/// Vollständiges Raster eines Frames.
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    /// Senkrechte Linien (eine je Frame 1..=frame_count)
    pub frame_lines: Vec<GridLine>,
    /// Waagerechte Linien (eine je Werte-Tick 1..=y_tick_count)
    pub value_lines: Vec<GridLine>,
    /// Ticks unter der Zeitachse (ausgedünnt)
    pub frame_ticks: Vec<AxisTick>,
    /// Ticks links der y-Achse
    pub value_ticks: Vec<AxisTick>,
}

/// Ob der Frame-Tick `index` bei `frame_count` sichtbaren Frames beschriftet wird.
///
/// Über 45 Frames entfallen ungerade Indizes, über 90 zusätzlich `index % 4 == 2`.
pub fn frame_tick_visible(frame_count: u32, index: u32) -> bool {
    if frame_count > 45 && index % 2 == 1 {
        return false;
    }
    if frame_count > 90 && index % 4 == 2 {
        return false;
    }
    true
}

/// Wert des y-Ticks `index`.
pub fn value_tick(y_range: f32, y_tick_count: u32, index: u32) -> f32 {
    y_range * index as f32 / y_tick_count as f32
}

impl GridLayout {
    /// Berechnet das Raster für den aktuellen Mapper-Zustand.
    pub fn compute(mapper: &GraphMapper) -> Self {
        let (top, left) = (mapper.top(), mapper.left());
        let (bottom, right) = (mapper.bottom(), mapper.right());
        let frame_count = mapper.frame_count();
        let y_tick_count = mapper.y_tick_count();

        let frame_lines = (1..=frame_count)
            .map(|i| {
                let x = left + i as f32 * mapper.frame_width();
                GridLine {
                    from: Vec2::new(x, bottom),
                    to: Vec2::new(x, top),
                    major: i % MAJOR_LINE_INTERVAL == 0,
                }
            })
            .collect();

        let value_lines = (1..=y_tick_count)
            .map(|i| {
                let y = bottom - i as f32 * mapper.y_tick_height();
                GridLine {
                    from: Vec2::new(left, y),
                    to: Vec2::new(right, y),
                    major: i % MAJOR_LINE_INTERVAL == 0,
                }
            })
            .collect();

        let frame_ticks = (0..=frame_count)
            .filter(|&i| frame_tick_visible(frame_count, i))
            .map(|i| {
                let x = left + i as f32 * mapper.frame_width();
                AxisTick {
                    from: Vec2::new(x, bottom),
                    to: Vec2::new(x, bottom + TICK_LENGTH_PX),
                    label_pos: Vec2::new(x, bottom + FRAME_LABEL_OFFSET_PX),
                    label: i.to_string(),
                }
            })
            .collect();

        let value_ticks = (0..=y_tick_count)
            .map(|i| {
                let y = bottom - i as f32 * mapper.y_tick_height();
                AxisTick {
                    from: Vec2::new(left, y),
                    to: Vec2::new(left - TICK_LENGTH_PX, y),
                    label_pos: Vec2::new(left - VALUE_LABEL_OFFSET_PX, y),
                    label: format!("{:.1}", value_tick(mapper.y_range(), y_tick_count, i)),
                }
            })
            .collect();

        Self {
            frame_lines,
            value_lines,
            frame_ticks,
            value_ticks,
        }
    }
}
