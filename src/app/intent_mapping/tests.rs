use crate::app::{AppCommand, AppIntent, AppState, EditorTool};
use crate::core::ComponentType;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn test_place_tool_click_places_and_returns_to_select() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Place(ComponentType::Capacitor);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerDown {
            world_pos: Vec2::new(41.0, 59.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::PlaceComponent {
            component_type: ComponentType::Capacitor,
            ..
        }
    ));
    assert!(matches!(
        commands[1],
        AppCommand::SetEditorTool {
            tool: EditorTool::Select
        }
    ));
}

#[test]
fn test_wire_tool_click_uses_configured_hit_radius() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Wire;
    state.options.terminal_hit_radius = 8.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerDown {
            world_pos: Vec2::ZERO,
        },
    );

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::WireToolPick { max_distance, .. } => {
            assert!((max_distance - 8.0).abs() < f32::EPSILON)
        }
        ref other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn test_select_and_delete_tools_map_to_their_commands() {
    let mut state = AppState::new();
    let click = AppIntent::CanvasPointerDown {
        world_pos: Vec2::new(5.0, 5.0),
    };

    let commands = map_intent_to_commands(&state, click.clone());
    assert!(matches!(commands[..], [AppCommand::SelectComponentAt { .. }]));

    state.editor.active_tool = EditorTool::Delete;
    let commands = map_intent_to_commands(&state, click);
    assert!(matches!(commands[..], [AppCommand::DeleteComponentAt { .. }]));
}

#[test]
fn test_pointer_move_without_pending_wire_maps_to_nothing() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Wire;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerMoved {
            world_pos: Vec2::new(10.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn test_run_request_is_dropped_while_simulation_runs() {
    let state = AppState::new();
    let _guard = state
        .simulation
        .run_control
        .acquire()
        .expect("Freigabe sollte verfügbar sein");

    let commands = map_intent_to_commands(&state, AppIntent::RunSimulationRequested);

    assert!(commands.is_empty());
}

#[test]
fn test_clear_requested_maps_to_reset() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ClearRequested);

    assert!(matches!(commands[..], [AppCommand::ResetDocument]));
}
