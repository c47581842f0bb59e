//! „+“/„−“-Buttons für die Frame-Anzahl neben dem Ende der Zeitachse.

use crate::app::AppIntent;
use crate::core::GraphMapper;

/// Horizontaler Abstand der Buttons vom rechten Plotrand.
const BUTTON_OFFSET_X: f32 = 30.0;
/// Vertikaler Abstand der Buttons von der Zeitachse.
const BUTTON_OFFSET_Y: f32 = 20.0;
/// Kantenlänge der Buttons.
const BUTTON_SIZE: f32 = 20.0;

/// Platziert die Frame-Anzahl-Buttons absolut über der Zeichenfläche.
pub fn render_frame_count_buttons(ui: &mut egui::Ui, mapper: &GraphMapper) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let x = mapper.right() + BUTTON_OFFSET_X;
    let size = egui::vec2(BUTTON_SIZE, BUTTON_SIZE);

    let up_rect = egui::Rect::from_min_size(egui::pos2(x, mapper.bottom() - BUTTON_OFFSET_Y), size);
    if ui
        .put(up_rect, egui::Button::new("+"))
        .on_hover_text("Einen Frame mehr (+)")
        .clicked()
    {
        events.push(AppIntent::IncreaseFrameCountRequested);
    }

    let down_rect =
        egui::Rect::from_min_size(egui::pos2(x, mapper.bottom() + BUTTON_OFFSET_Y), size);
    if ui
        .put(down_rect, egui::Button::new("−"))
        .on_hover_text("Einen Frame weniger (-)")
        .clicked()
    {
        events.push(AppIntent::DecreaseFrameCountRequested);
    }

    events
}
