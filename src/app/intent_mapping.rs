//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::GraphMapper;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::CanvasResized { canvas } => vec![AppCommand::SetCanvasRect { canvas }],
        AppIntent::PointerUpdated { input } => vec![AppCommand::ProcessPointer { input }],
        AppIntent::AddKeyframeRequested => vec![AppCommand::BeginPlacingKeyframe],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedKeyframe],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearKeyframes],
        AppIntent::CopyToClipboardRequested => vec![AppCommand::CopyKeyframesToClipboard],
        AppIntent::IncreaseFrameCountRequested => {
            let frame_count = state.session.mapper().frame_count().saturating_add(1);
            vec![AppCommand::SetFrameCount { frame_count }]
        }
        AppIntent::DecreaseFrameCountRequested => {
            let current = state.session.mapper().frame_count();
            if current > GraphMapper::FRAME_COUNT_MIN {
                vec![AppCommand::SetFrameCount {
                    frame_count: current - 1,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::CancelRequested => vec![AppCommand::CancelInteraction],
        AppIntent::SelectedValueEdited { value } => {
            vec![AppCommand::SetSelectedValue { value }]
        }
        AppIntent::SelectedSlopeEdited { slope } => {
            vec![AppCommand::SetSelectedSlope { slope }]
        }
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
