//! Use-Cases für das Wire-Tool (Zwei-Klick-Verdrahtung).

use crate::app::tools::WirePick;
use crate::app::AppState;
use crate::core::DocumentError;

/// Verarbeitet einen Klick im Wire-Modus.
///
/// Der erste Treffer merkt sich den Anschluss, der zweite legt die Leitung an.
/// Eine Leitung am selben Bauteil wird stillschweigend verworfen.
/// Gibt `true` zurück, wenn eine Leitung angelegt wurde.
pub fn wire_tool_pick(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32) -> bool {
    let pick = state
        .editor
        .wire_tool
        .pick(&state.document, world_pos, max_distance);

    match pick {
        WirePick::Missed => {
            log::debug!(
                "Wire-Tool: kein Anschluss bei ({:.1}, {:.1})",
                world_pos.x,
                world_pos.y
            );
            false
        }
        WirePick::Pending(endpoint) => {
            log::info!(
                "Wire-Tool: Start an Bauteil {} / Anschluss {}",
                endpoint.component_id,
                endpoint.terminal_id
            );
            false
        }
        WirePick::Completed { start, end } => {
            let result = state.document_mut().create_wire(
                start.component_id,
                start.terminal_id,
                end.component_id,
                end.terminal_id,
            );
            match result {
                Ok(_) => {
                    log::info!(
                        "Leitung {}:{} → {}:{} erstellt",
                        start.component_id,
                        start.terminal_id,
                        end.component_id,
                        end.terminal_id
                    );
                    true
                }
                Err(DocumentError::SelfConnection { component_id }) => {
                    log::debug!("Leitung an Bauteil {} mit sich selbst verworfen", component_id);
                    false
                }
                Err(e) => {
                    log::warn!("Leitung verworfen: {}", e);
                    false
                }
            }
        }
    }
}

/// Führt das Gummiband des Wire-Tools nach. Gibt `true` zurück, wenn neu gezeichnet werden muss.
pub fn update_rubber_band(state: &mut AppState, world_pos: glam::Vec2) -> bool {
    state.editor.wire_tool.track_cursor(world_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentType, TERMINAL_HIT_RADIUS};
    use glam::Vec2;

    #[test]
    fn test_self_connection_is_silently_discarded() {
        let mut state = AppState::new();
        state
            .document_mut()
            .create_component(ComponentType::Resistor, Vec2::ZERO)
            .expect("Platzierung");

        assert!(!wire_tool_pick(&mut state, Vec2::new(0.0, 20.0), TERMINAL_HIT_RADIUS));
        assert!(!wire_tool_pick(&mut state, Vec2::new(60.0, 20.0), TERMINAL_HIT_RADIUS));

        assert_eq!(state.wire_count(), 0);
        assert!(state.editor.wire_tool.pending().is_none());
    }

    #[test]
    fn test_rubber_band_follows_pointer_while_pending() {
        let mut state = AppState::new();
        state
            .document_mut()
            .create_component(ComponentType::Resistor, Vec2::ZERO)
            .expect("Platzierung");

        assert!(!update_rubber_band(&mut state, Vec2::new(5.0, 5.0)));

        wire_tool_pick(&mut state, Vec2::new(60.0, 20.0), TERMINAL_HIT_RADIUS);
        assert!(update_rubber_band(&mut state, Vec2::new(90.0, 40.0)));
        assert_eq!(
            state.editor.wire_tool.rubber_band(),
            Some([Vec2::new(60.0, 20.0), Vec2::new(90.0, 40.0)])
        );
    }
}
