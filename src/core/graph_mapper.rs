//! Affine Abbildung zwischen Kurvenraum (Frame, Wert) und Bildschirm-Pixeln.

use glam::Vec2;

/// Bildschirm-Rechteck des Plotbereichs in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl PlotBounds {
    /// Erstellt Plot-Grenzen aus den vier Kanten.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Bildet Kurvenkoordinaten auf Bildschirmpositionen ab (und zurück).
///
/// x wächst mit dem Frame, y ist gespiegelt: Bildschirm-y wächst nach unten,
/// Kurvenwerte wachsen nach oben. Abgeleitete Größen (`width`, `height`,
/// `frame_width`, `y_tick_height`) werden bei jeder Änderung von Grenzen
/// oder `frame_count` sofort neu berechnet.
#[derive(Debug, Clone)]
pub struct GraphMapper {
    top: f32,
    left: f32,
    bottom: f32,
    right: f32,
    y_range: f32,
    y_tick_count: u32,
    frame_count: u32,
    width: f32,
    height: f32,
    y_tick_height: f32,
    frame_width: f32,
}

impl GraphMapper {
    /// Untergrenze für sichtbare Frames.
    pub const FRAME_COUNT_MIN: u32 = 1;
    /// Mindestausdehnung des Plotbereichs in Pixeln.
    const MIN_EXTENT_PX: f32 = 1.0;

    /// Erstellt einen Mapper für die gegebenen Grenzen.
    pub fn new(bounds: PlotBounds, y_range: f32, y_tick_count: u32, frame_count: u32) -> Self {
        let mut mapper = Self {
            top: bounds.top,
            left: bounds.left,
            bottom: bounds.bottom,
            right: bounds.right,
            y_range: if y_range > 0.0 { y_range } else { 1.0 },
            y_tick_count: y_tick_count.max(1),
            frame_count: frame_count.max(Self::FRAME_COUNT_MIN),
            width: 0.0,
            height: 0.0,
            y_tick_height: 0.0,
            frame_width: 0.0,
        };
        mapper.recompute();
        mapper
    }

    fn recompute(&mut self) {
        self.width = (self.right - self.left).max(Self::MIN_EXTENT_PX);
        self.height = (self.bottom - self.top).max(Self::MIN_EXTENT_PX);
        self.y_tick_height = self.height / self.y_tick_count as f32;
        self.frame_width = self.width / self.frame_count as f32;
    }

    /// Kurvenkoordinate → Bildschirmposition.
    pub fn coord_to_screen(&self, coord: Vec2) -> Vec2 {
        Vec2::new(
            self.left + coord.x * self.frame_width,
            self.bottom - coord.y * self.height / self.y_range,
        )
    }

    /// Bildschirmposition → Kurvenkoordinate (exakte Umkehrung).
    pub fn screen_to_coord(&self, screen_pos: Vec2) -> Vec2 {
        Vec2::new(
            (screen_pos.x - self.left) / self.frame_width,
            (self.bottom - screen_pos.y) * self.y_range / self.height,
        )
    }

    /// Übernimmt neue Plot-Grenzen und berechnet alle abgeleiteten Maße neu.
    pub fn resize(&mut self, bounds: PlotBounds) {
        self.top = bounds.top;
        self.left = bounds.left;
        self.bottom = bounds.bottom;
        self.right = bounds.right;
        self.recompute();
    }

    /// Setzt die Anzahl sichtbarer Frames (mindestens 1).
    pub fn set_frame_count(&mut self, frame_count: u32) {
        self.frame_count = frame_count.max(Self::FRAME_COUNT_MIN);
        self.frame_width = self.width / self.frame_count as f32;
    }

    /// Prüft, ob eine Bildschirmposition im Plot-Rechteck liegt (Ränder inklusive).
    pub fn contains(&self, screen_pos: Vec2) -> bool {
        screen_pos.x >= self.left
            && screen_pos.x <= self.left + self.width
            && screen_pos.y >= self.top
            && screen_pos.y <= self.top + self.height
    }

    /// Gerundeter Frame-Index unter einer Bildschirm-x-Position.
    pub fn frame_at_screen_x(&self, x: f32) -> i64 {
        ((x - self.left) / self.width * self.frame_count as f32).round() as i64
    }

    /// Rastet eine Bildschirm-y-Position auf die nächste Werte-Tick-Linie ein.
    pub fn snap_y_to_tick(&self, y: f32) -> f32 {
        let tick = ((y - self.top) / self.height * self.y_tick_count as f32).round();
        self.top + tick * self.y_tick_height
    }

    pub fn bounds(&self) -> PlotBounds {
        PlotBounds::new(self.top, self.left, self.bottom, self.right)
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Wertebereich der y-Achse (0..=y_range).
    pub fn y_range(&self) -> f32 {
        self.y_range
    }

    pub fn y_tick_count(&self) -> u32 {
        self.y_tick_count
    }

    /// Pixelhöhe eines Werte-Ticks.
    pub fn y_tick_height(&self) -> f32 {
        self.y_tick_height
    }

    /// Anzahl sichtbarer Frames.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Pixelbreite eines Frames.
    pub fn frame_width(&self) -> f32 {
        self.frame_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mapper() -> GraphMapper {
        GraphMapper::new(PlotBounds::new(100.0, 100.0, 800.0, 1500.0), 2.0, 20, 30)
    }

    #[test]
    fn test_derived_metrics() {
        let m = mapper();
        assert_relative_eq!(m.width(), 1400.0);
        assert_relative_eq!(m.height(), 700.0);
        assert_relative_eq!(m.y_tick_height(), 35.0);
        assert_relative_eq!(m.frame_width(), 1400.0 / 30.0);
    }

    #[test]
    fn test_origin_maps_to_bottom_left() {
        let m = mapper();
        let screen = m.coord_to_screen(Vec2::ZERO);
        assert_relative_eq!(screen.x, 100.0);
        assert_relative_eq!(screen.y, 800.0);

        let top_right = m.coord_to_screen(Vec2::new(30.0, 2.0));
        assert_relative_eq!(top_right.x, 1500.0, epsilon = 1e-3);
        assert_relative_eq!(top_right.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_round_trip_both_directions() {
        let m = mapper();
        for coord in [
            Vec2::new(0.0, 0.0),
            Vec2::new(15.0, 0.5),
            Vec2::new(29.5, 1.93),
            Vec2::new(-3.0, -0.25),
        ] {
            let back = m.screen_to_coord(m.coord_to_screen(coord));
            assert_relative_eq!(back.x, coord.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, coord.y, epsilon = 1e-4);
        }
        for screen in [Vec2::new(100.0, 100.0), Vec2::new(733.3, 412.7)] {
            let back = m.coord_to_screen(m.screen_to_coord(screen));
            assert_relative_eq!(back.x, screen.x, epsilon = 1e-3);
            assert_relative_eq!(back.y, screen.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_resize_recomputes_metrics() {
        let mut m = mapper();
        m.resize(PlotBounds::new(100.0, 100.0, 400.0, 700.0));
        assert_relative_eq!(m.width(), 600.0);
        assert_relative_eq!(m.height(), 300.0);
        assert_relative_eq!(m.frame_width(), 20.0);
        assert_relative_eq!(m.y_tick_height(), 15.0);
        assert!(m.contains(Vec2::new(700.0, 400.0)));
        assert!(!m.contains(Vec2::new(701.0, 400.0)));
    }

    #[test]
    fn test_frame_count_is_clamped_to_one() {
        let mut m = mapper();
        m.set_frame_count(0);
        assert_eq!(m.frame_count(), 1);
        assert_relative_eq!(m.frame_width(), 1400.0);
        assert!(m.frame_width().is_finite());
    }

    #[test]
    fn test_collapsed_bounds_stay_finite() {
        let m = GraphMapper::new(PlotBounds::new(100.0, 100.0, 50.0, 80.0), 2.0, 20, 30);
        let coord = m.screen_to_coord(Vec2::new(90.0, 60.0));
        assert!(coord.x.is_finite() && coord.y.is_finite());
    }

    #[test]
    fn test_snap_y_to_tick() {
        let m = mapper();
        // 35 px pro Tick: 120 → Tick 1 (135), 110 → Tick 0 (100)
        assert_relative_eq!(m.snap_y_to_tick(120.0), 135.0);
        assert_relative_eq!(m.snap_y_to_tick(110.0), 100.0);
        assert_relative_eq!(m.snap_y_to_tick(800.0), 800.0);
    }

    #[test]
    fn test_frame_at_screen_x_rounds() {
        let m = mapper();
        let fw = m.frame_width();
        assert_eq!(m.frame_at_screen_x(100.0), 0);
        assert_eq!(m.frame_at_screen_x(100.0 + fw * 4.4), 4);
        assert_eq!(m.frame_at_screen_x(100.0 + fw * 4.6), 5);
    }
}
