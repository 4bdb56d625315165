//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let wire_tool = &state.editor.wire_tool;

    RenderScene {
        document: state.document.clone(),
        selected_component_id: state.selection.selected_component_id,
        pending_wire: wire_tool.pending().copied(),
        rubber_band: wire_tool.rubber_band(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::ComponentType;
    use glam::Vec2;
    use std::sync::Arc;

    #[test]
    fn test_scene_shares_document_until_next_mutation() {
        let mut state = AppState::new();
        state
            .document_mut()
            .create_component(ComponentType::Resistor, Vec2::ZERO)
            .expect("Platzierung");

        let scene = build(&state);
        assert!(Arc::ptr_eq(&scene.document, &state.document));
        assert!(scene.has_content());

        // Copy-on-Write: die Szene behält den alten Stand
        state.document_mut().reset();
        assert_eq!(scene.document.component_count(), 1);
        assert!(state.document.is_empty());
    }

    #[test]
    fn test_empty_state_has_no_transient_overlays() {
        let scene = build(&AppState::new());

        assert!(!scene.has_content());
        assert!(scene.pending_wire.is_none());
        assert!(scene.rubber_band.is_none());
        assert!(scene.selected_component_id.is_none());
    }
}
