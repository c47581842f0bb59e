//! Hermite-Keyframe-Editor.
//!
//! Interaktiver Editor für eine 1D-Animationskurve aus Hermite-Keyframes.

use eframe::egui;
use hermite_keyframe_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Hermite-Keyframe-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1600.0, 900.0])
                .with_min_inner_size([500.0, 500.0])
                .with_title("hermite animation editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "hermite animation editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        self.process_events(events);

        self.flush_clipboard(ctx);

        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(&ui.painter_at(rect), &scene);

                events.extend(ui::render_frame_count_buttons(ui, self.state.session.mapper()));
                events.extend(self.input.collect_canvas_events(ui, &response));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn flush_clipboard(&mut self, ctx: &egui::Context) {
        if let Some(text) = self.state.take_clipboard_text() {
            ctx.copy_text(text);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if ctx.input(|i| i.pointer.is_moving() || i.pointer.any_down())
            || self.state.session.is_placing()
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
