//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenfläche & Interaktion ===
            AppCommand::SetCanvasRect { canvas } => {
                handlers::interaction::set_canvas_rect(state, canvas)
            }
            AppCommand::ProcessPointer { input } => {
                handlers::interaction::process_pointer(state, &input)
            }
            AppCommand::CancelInteraction => handlers::interaction::cancel(state),

            // === Editing ===
            AppCommand::BeginPlacingKeyframe => handlers::editing::begin_placing(state),
            AppCommand::DeleteSelectedKeyframe => handlers::editing::delete_selected(state),
            AppCommand::ClearKeyframes => handlers::editing::clear_all(state),
            AppCommand::SetSelectedValue { value } => {
                handlers::editing::set_selected_value(state, value)
            }
            AppCommand::SetSelectedSlope { slope } => {
                handlers::editing::set_selected_slope(state, slope)
            }

            // === Ansicht ===
            AppCommand::SetFrameCount { frame_count } => {
                handlers::view::set_frame_count(state, frame_count)
            }

            // === Export ===
            AppCommand::CopyKeyframesToClipboard => handlers::export::copy_to_clipboard(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
