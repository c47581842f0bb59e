//! Zentrale Konfiguration für den Hermite-Keyframe-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::PlotBounds;
use serde::{Deserialize, Serialize};

// ── Plot-Layout ─────────────────────────────────────────────────────

/// Abstand des Plots vom linken Rand der Zeichenfläche (Platz für Wert-Beschriftung).
pub const PLOT_MARGIN_LEFT: f32 = 100.0;
/// Abstand des Plots vom oberen Rand.
pub const PLOT_MARGIN_TOP: f32 = 40.0;
/// Abstand des Plots vom rechten Rand (Platz für Frame-Anzahl-Buttons).
pub const PLOT_MARGIN_RIGHT: f32 = 100.0;
/// Abstand des Plots vom unteren Rand (Platz für Frame-Beschriftung).
pub const PLOT_MARGIN_BOTTOM: f32 = 80.0;

// ── Achsen ──────────────────────────────────────────────────────────

/// Wertebereich der y-Achse (0..=Y_RANGE).
pub const Y_RANGE: f32 = 2.0;
/// Anzahl Werte-Ticks auf der y-Achse.
pub const Y_TICK_COUNT: u32 = 20;
/// Anfängliche Anzahl sichtbarer Frames.
pub const FRAME_COUNT: u32 = 30;

// ── Interaktion ─────────────────────────────────────────────────────

/// Zeichenradius eines Keyframe-Markers in Pixeln.
pub const KEYFRAME_RADIUS_PX: f32 = 5.0;
/// Treffer-Radius für Keyframes in Pixeln (Tangenten-Griffe: doppelt).
pub const HIT_RADIUS_PX: f32 = 5.0;
/// Vertikale Mindestbewegung, bevor ein Wert-Drag greift.
pub const DRAG_THRESHOLD_PX: f32 = 3.0;
/// Betragsgrenze für Tangenten-Steigungen.
pub const MAX_SLOPE: f32 = 100.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Abtastschritt der Kurve in Pixeln.
pub const CURVE_SAMPLE_STEP_PX: f32 = 1.0;
/// Schriftgröße der Achsenbeschriftung.
pub const LABEL_FONT_SIZE: f32 = 16.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `hermite_keyframe_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Linker Plot-Rand in Pixeln
    pub plot_margin_left: f32,
    /// Oberer Plot-Rand in Pixeln
    pub plot_margin_top: f32,
    /// Rechter Plot-Rand in Pixeln
    pub plot_margin_right: f32,
    /// Unterer Plot-Rand in Pixeln
    pub plot_margin_bottom: f32,

    // ── Achsen ──────────────────────────────────────────────────
    /// Wertebereich der y-Achse
    pub y_range: f32,
    /// Anzahl Werte-Ticks
    pub y_tick_count: u32,
    /// Sichtbare Frames beim Start
    pub frame_count: u32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Zeichenradius der Keyframe-Marker
    pub keyframe_radius_px: f32,
    /// Treffer-Radius für Keyframe-Klicks
    pub hit_radius_px: f32,
    /// Mindestbewegung vor Wert-Drag
    pub drag_threshold_px: f32,
    /// Maximaler Steigungsbetrag beim Tangenten-Drag
    #[serde(default = "default_max_slope")]
    pub max_slope: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Abtastschritt der Kurve in Pixeln
    pub curve_sample_step_px: f32,
    /// Schriftgröße der Achsenbeschriftung
    pub label_font_size: f32,
    /// Hintergrund der Zeichenfläche
    pub background_color: [f32; 4],
    /// Achsen und Beschriftung
    pub axis_color: [f32; 4],
    /// Hervorgehobene Rasterlinien
    pub grid_major_color: [f32; 4],
    /// Normale Rasterlinien
    pub grid_minor_color: [f32; 4],
    /// Interpolierte Kurve
    pub curve_color: [f32; 4],
    /// Keyframe-Marker
    pub keyframe_color: [f32; 4],
    /// Selektierter Keyframe
    pub keyframe_selected_color: [f32; 4],
    /// Tangenten-Griffe
    pub handle_color: [f32; 4],
    /// Vorschau-Marker beim Platzieren
    pub ghost_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            plot_margin_left: PLOT_MARGIN_LEFT,
            plot_margin_top: PLOT_MARGIN_TOP,
            plot_margin_right: PLOT_MARGIN_RIGHT,
            plot_margin_bottom: PLOT_MARGIN_BOTTOM,

            y_range: Y_RANGE,
            y_tick_count: Y_TICK_COUNT,
            frame_count: FRAME_COUNT,

            keyframe_radius_px: KEYFRAME_RADIUS_PX,
            hit_radius_px: HIT_RADIUS_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            max_slope: MAX_SLOPE,

            curve_sample_step_px: CURVE_SAMPLE_STEP_PX,
            label_font_size: LABEL_FONT_SIZE,
            background_color: [0.96, 0.96, 0.96, 1.0],
            axis_color: [0.0, 0.0, 0.0, 1.0],
            grid_major_color: [0.51, 0.51, 0.51, 1.0],
            grid_minor_color: [0.78, 0.78, 0.78, 1.0],
            curve_color: [0.0, 0.47, 0.95, 0.5],
            keyframe_color: [0.9, 0.16, 0.22, 1.0],
            keyframe_selected_color: [1.0, 0.63, 0.0, 1.0],
            handle_color: [0.0, 0.47, 0.95, 1.0],
            ghost_color: [0.9, 0.16, 0.22, 0.4],
        }
    }
}

/// Serde-Default für `max_slope` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_max_slope() -> f32 {
    MAX_SLOPE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("hermite_keyframe_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("hermite_keyframe_editor.toml")
    }

    /// Treffer-Radius der Tangenten-Griffe (doppelter Keyframe-Radius).
    pub fn handle_hit_radius_px(&self) -> f32 {
        self.hit_radius_px * 2.0
    }

    /// Plot-Grenzen innerhalb einer Zeichenfläche `[min_x, min_y, max_x, max_y]`.
    pub fn plot_bounds(&self, canvas: [f32; 4]) -> PlotBounds {
        let [min_x, min_y, max_x, max_y] = canvas;
        PlotBounds::new(
            min_y + self.plot_margin_top,
            min_x + self.plot_margin_left,
            max_y - self.plot_margin_bottom,
            max_x - self.plot_margin_right,
        )
    }
}
