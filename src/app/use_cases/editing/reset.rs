//! Use-Case: Dokument leeren.

use crate::app::state::EditorTool;
use crate::app::AppState;

/// Setzt Dokument, Selektion, Wire-Tool und Werkzeug auf den Ausgangszustand.
///
/// Optionen, Command-Log und die Run-Freigabe bleiben erhalten.
pub fn reset_document(state: &mut AppState) {
    state.document_mut().reset();
    state.selection.clear();
    state.editor.wire_tool.reset();
    state.editor.active_tool = EditorTool::Select;
    state.ui.netlist_preview = None;
    state.ui.show_results = false;
    state.ui.status_message = None;
    log::info!("Dokument zurückgesetzt");
}
