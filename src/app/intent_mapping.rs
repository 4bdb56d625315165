//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::CanvasPointerDown { world_pos } => match state.editor.active_tool {
            // Nach jeder Platzierung zurück ins Select-Tool, auch wenn sie abgelehnt wurde
            EditorTool::Place(component_type) => vec![
                AppCommand::PlaceComponent {
                    component_type,
                    world_pos,
                },
                AppCommand::SetEditorTool {
                    tool: EditorTool::Select,
                },
            ],
            EditorTool::Wire => vec![AppCommand::WireToolPick {
                world_pos,
                max_distance: state.options.terminal_hit_radius,
            }],
            EditorTool::Select => vec![AppCommand::SelectComponentAt { world_pos }],
            EditorTool::Delete => vec![AppCommand::DeleteComponentAt { world_pos }],
        },
        AppIntent::CanvasPointerMoved { world_pos } => {
            if state.editor.active_tool == EditorTool::Wire
                && state.editor.wire_tool.pending().is_some()
            {
                vec![AppCommand::UpdateRubberBand { world_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::SelectedValueEdited { text } => vec![AppCommand::SetSelectedValue { text }],
        AppIntent::RunSimulationRequested => {
            if state.simulation.run_control.is_enabled() {
                vec![AppCommand::RunSimulation]
            } else {
                vec![]
            }
        }
        AppIntent::ClearRequested => vec![AppCommand::ResetDocument],
        AppIntent::CloseResultsRequested => vec![AppCommand::CloseResults],
        AppIntent::NetlistPreviewRequested => vec![AppCommand::BuildNetlistPreview],
        AppIntent::CloseNetlistPreviewRequested => vec![AppCommand::CloseNetlistPreview],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
