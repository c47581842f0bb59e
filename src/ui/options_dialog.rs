//! Optionen-Dialog für Achsen, Interaktion, Layout und Farben.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Achsen ──────────────────────────────────────
                    ui.collapsing("Achsen", |ui| {
                        changed |= drag_row(ui, "Wertebereich:", &mut opts.y_range, 0.1..=100.0, 0.05);
                        ui.horizontal(|ui| {
                            ui.label("Werte-Ticks:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.y_tick_count).range(1..=100))
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Frames beim Start:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.frame_count).range(1..=1000))
                                .changed();
                        });
                    });

                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaktion", |ui| {
                        changed |= drag_row(
                            ui,
                            "Marker-Radius (px):",
                            &mut opts.keyframe_radius_px,
                            1.0..=20.0,
                            0.1,
                        );
                        changed |= drag_row(
                            ui,
                            "Treffer-Radius (px):",
                            &mut opts.hit_radius_px,
                            1.0..=30.0,
                            0.1,
                        );
                        changed |= drag_row(
                            ui,
                            "Drag-Schwelle (px):",
                            &mut opts.drag_threshold_px,
                            0.0..=20.0,
                            0.1,
                        );
                        changed |= drag_row(
                            ui,
                            "Max. Steigung:",
                            &mut opts.max_slope,
                            0.1..=1000.0,
                            0.5,
                        );
                    });

                    // ── Layout ──────────────────────────────────────
                    ui.collapsing("Layout", |ui| {
                        changed |= drag_row(ui, "Rand links:", &mut opts.plot_margin_left, 0.0..=400.0, 1.0);
                        changed |= drag_row(ui, "Rand oben:", &mut opts.plot_margin_top, 0.0..=400.0, 1.0);
                        changed |= drag_row(ui, "Rand rechts:", &mut opts.plot_margin_right, 0.0..=400.0, 1.0);
                        changed |= drag_row(ui, "Rand unten:", &mut opts.plot_margin_bottom, 0.0..=400.0, 1.0);
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        changed |= drag_row(
                            ui,
                            "Abtastschritt (px):",
                            &mut opts.curve_sample_step_px,
                            0.5..=10.0,
                            0.1,
                        );
                        changed |= drag_row(
                            ui,
                            "Schriftgröße:",
                            &mut opts.label_font_size,
                            8.0..=32.0,
                            0.5,
                        );
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        changed |= color_edit(ui, "Achsen:", &mut opts.axis_color);
                        changed |= color_edit(ui, "Raster (5er):", &mut opts.grid_major_color);
                        changed |= color_edit(ui, "Raster:", &mut opts.grid_minor_color);
                        changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
                        changed |= color_edit(ui, "Keyframe:", &mut opts.keyframe_color);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.keyframe_selected_color);
                        changed |= color_edit(ui, "Tangenten-Griff:", &mut opts.handle_color);
                        changed |= color_edit(ui, "Vorschau:", &mut opts.ghost_color);
                    });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Beschriftete DragValue-Zeile für einen `f32`-Wert.
fn drag_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            color[0] = r as f32 / 255.0;
            color[1] = g as f32 / 255.0;
            color[2] = b as f32 / 255.0;
            color[3] = a as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
