//! Handler für Platzieren, Verdrahten, Löschen und Editor-Werkzeug.

use crate::app::notifier::Notifier;
use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ComponentType;

/// Aktiviert ein Editor-Werkzeug und setzt Selektion und wartende Leitung zurück.
///
/// Gilt auch, wenn das Werkzeug bereits aktiv ist.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.active_tool = tool;
    state.editor.wire_tool.reset();
    state.selection.clear();
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Platziert ein Bauteil. Eine abgelehnte Platzierung wird dem Benutzer gemeldet.
pub fn place_component(
    state: &mut AppState,
    notifier: &dyn Notifier,
    component_type: ComponentType,
    world_pos: glam::Vec2,
) {
    if let Err(e) = use_cases::editing::place_component(state, component_type, world_pos) {
        notifier.report_failure(&e.to_string());
    }
}

/// Verarbeitet einen Klick für das Wire-Tool.
pub fn wire_tool_pick(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32) {
    use_cases::wiring::wire_tool_pick(state, world_pos, max_distance);
}

/// Führt das Gummiband des Wire-Tools nach.
pub fn update_rubber_band(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::wiring::update_rubber_band(state, world_pos);
}

/// Löscht das oberste Bauteil an der Weltposition.
pub fn delete_component_at(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::delete_component_at(state, world_pos);
}

/// Leert das Dokument.
pub fn reset_document(state: &mut AppState) {
    use_cases::editing::reset_document(state);
}
