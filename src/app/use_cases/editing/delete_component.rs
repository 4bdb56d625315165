//! Use-Case: Oberstes Bauteil unter dem Zeiger löschen.

use crate::app::AppState;
use crate::core::component_at;

/// Löscht das oberste Bauteil an der Weltposition samt angeschlossener Leitungen.
///
/// War das Bauteil selektiert, wird die Selektion aufgehoben.
/// Gibt die ID des gelöschten Bauteils zurück.
pub fn delete_component_at(state: &mut AppState, world_pos: glam::Vec2) -> Option<u64> {
    let id = component_at(&state.document, world_pos)?.id;

    let wires_before = state.document.wire_count();
    state.document_mut().delete_component(id);

    if state.selection.is_selected(id) {
        state.selection.clear();
    }

    log::info!(
        "Bauteil {} gelöscht ({} Leitungen entfernt)",
        id,
        wires_before - state.document.wire_count()
    );
    Some(id)
}
