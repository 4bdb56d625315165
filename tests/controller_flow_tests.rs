//! Integrationstests für den Werkzeug-Ablauf über den Controller:
//! - Platzieren mit Raster und Masse-Beschränkung
//! - Zwei-Klick-Verdrahtung und Löschen mit Kaskade
//! - Selektion, Wertbearbeitung und Werkzeugwechsel
//! - Optionen übernehmen (Rasterweite, Speicherfehler)

use circuit_schematic_editor::export::SolverClient;
use circuit_schematic_editor::{
    AppCommand, AppController, AppIntent, AppState, ComponentType, EditorOptions, EditorTool,
    NotificationInbox, SolverPayload,
};
use glam::Vec2;

/// Solver-Attrappe ohne Netzwerkzugriff
struct NullSolver;

impl SolverClient for NullSolver {
    fn submit(&self, _payload: &SolverPayload) -> anyhow::Result<()> {
        Ok(())
    }
}

fn setup() -> (AppController, AppState, NotificationInbox) {
    let inbox = NotificationInbox::new();
    let controller = AppController::new(Box::new(inbox.clone()), Box::new(NullSolver));
    (controller, AppState::new(), inbox)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn activate(controller: &mut AppController, state: &mut AppState, tool: EditorTool) {
    send(controller, state, AppIntent::SetEditorToolRequested { tool });
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::CanvasPointerDown {
            world_pos: Vec2::new(x, y),
        },
    );
}

fn place(
    controller: &mut AppController,
    state: &mut AppState,
    component_type: ComponentType,
    x: f32,
    y: f32,
) -> u64 {
    activate(controller, state, EditorTool::Place(component_type));
    click(controller, state, x, y);
    state
        .document
        .components()
        .last()
        .map(|c| c.id)
        .expect("Es sollte ein Bauteil platziert sein")
}

#[test]
fn test_resistor_placement_snaps_to_grid() {
    let (mut controller, mut state, _) = setup();

    place(&mut controller, &mut state, ComponentType::Resistor, 103.0, 97.0);

    let component = state
        .document
        .components()
        .next()
        .expect("Bauteil vorhanden");
    assert_eq!(component.component_type(), ComponentType::Resistor);
    assert_eq!(component.position, Vec2::new(100.0, 100.0));
    assert_eq!(component.size, Vec2::new(60.0, 40.0));
    assert_eq!(component.value(), Some(1000.0));
    assert_eq!(component.terminals.len(), 2);
    assert_eq!(component.terminals[0].position, Vec2::new(100.0, 120.0));
    assert_eq!(component.terminals[1].position, Vec2::new(160.0, 120.0));
    assert_eq!(state.editor.active_tool, EditorTool::Select);
}

#[test]
fn test_second_ground_is_rejected_and_tool_returns_to_select() {
    let (mut controller, mut state, inbox) = setup();

    place(&mut controller, &mut state, ComponentType::Ground, 0.0, 0.0);
    activate(&mut controller, &mut state, EditorTool::Place(ComponentType::Ground));
    click(&mut controller, &mut state, 300.0, 300.0);

    assert_eq!(state.component_count(), 1);
    assert_eq!(state.editor.active_tool, EditorTool::Select);
    assert_eq!(inbox.len(), 1, "Genau eine Meldung für die zweite Masse");

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SetEditorTool {
            tool: EditorTool::Select,
        } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_wire_between_two_resistors_then_delete_cascades() {
    let (mut controller, mut state, _) = setup();

    let a = place(&mut controller, &mut state, ComponentType::Resistor, 0.0, 0.0);
    let b = place(&mut controller, &mut state, ComponentType::Resistor, 200.0, 0.0);

    activate(&mut controller, &mut state, EditorTool::Wire);
    click(&mut controller, &mut state, 60.0, 20.0);
    assert!(state.editor.wire_tool.pending().is_some());
    click(&mut controller, &mut state, 200.0, 20.0);

    assert_eq!(state.wire_count(), 1);
    let wire = state.document.wires()[0];
    assert_eq!((wire.start.component_id, wire.start.terminal_id), (a, 1));
    assert_eq!((wire.end.component_id, wire.end.terminal_id), (b, 0));
    assert!(state.editor.wire_tool.pending().is_none());

    activate(&mut controller, &mut state, EditorTool::Delete);
    click(&mut controller, &mut state, 30.0, 20.0);

    assert_eq!(state.component_count(), 1);
    assert!(state.document.component(b).is_some());
    assert_eq!(state.wire_count(), 0);
}

#[test]
fn test_select_on_empty_canvas_clears_selection() {
    let (mut controller, mut state, _) = setup();
    let id = place(&mut controller, &mut state, ComponentType::Capacitor, 0.0, 0.0);

    click(&mut controller, &mut state, 20.0, 20.0);
    assert_eq!(state.selection.selected_component_id, Some(id));

    click(&mut controller, &mut state, 500.0, 500.0);
    assert_eq!(state.selection.selected_component_id, None);
}

#[test]
fn test_value_edit_writes_through_and_coerces_garbage() {
    let (mut controller, mut state, _) = setup();
    let id = place(&mut controller, &mut state, ComponentType::VoltageSource, 0.0, 0.0);
    click(&mut controller, &mut state, 20.0, 30.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::SelectedValueEdited { text: "12".into() },
    );
    assert_eq!(state.document.component(id).and_then(|c| c.value()), Some(12.0));

    send(
        &mut controller,
        &mut state,
        AppIntent::SelectedValueEdited { text: "12x".into() },
    );
    assert_eq!(state.document.component(id).and_then(|c| c.value()), Some(0.0));
    assert_eq!(state.selection.value_text, "12x");
}

#[test]
fn test_tool_switch_clears_selection_and_pending_wire() {
    let (mut controller, mut state, _) = setup();
    let id = place(&mut controller, &mut state, ComponentType::Resistor, 0.0, 0.0);
    click(&mut controller, &mut state, 30.0, 20.0);
    assert_eq!(state.selection.selected_component_id, Some(id));

    // Auch das bereits aktive Werkzeug setzt zurück
    activate(&mut controller, &mut state, EditorTool::Select);
    assert_eq!(state.selection.selected_component_id, None);

    activate(&mut controller, &mut state, EditorTool::Wire);
    click(&mut controller, &mut state, 0.0, 20.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::CanvasPointerMoved {
            world_pos: Vec2::new(80.0, 80.0),
        },
    );
    assert!(controller.build_render_scene(&state).rubber_band.is_some());

    activate(&mut controller, &mut state, EditorTool::Wire);
    assert!(state.editor.wire_tool.pending().is_none());
    assert!(controller.build_render_scene(&state).rubber_band.is_none());
}

#[test]
fn test_clear_resets_document_and_tool() {
    let (mut controller, mut state, _) = setup();
    place(&mut controller, &mut state, ComponentType::Ground, 0.0, 0.0);
    place(&mut controller, &mut state, ComponentType::Resistor, 100.0, 0.0);
    activate(&mut controller, &mut state, EditorTool::Wire);
    click(&mut controller, &mut state, 100.0, 20.0);

    send(&mut controller, &mut state, AppIntent::ClearRequested);

    assert!(state.document.is_empty());
    assert_eq!(state.document.next_component_id(), 0);
    assert_eq!(state.document.ground_id(), None);
    assert_eq!(state.editor.active_tool, EditorTool::Select);
    assert!(state.editor.wire_tool.pending().is_none());

    // Masse ist nach dem Leeren wieder platzierbar
    let id = place(&mut controller, &mut state, ComponentType::Ground, 0.0, 0.0);
    assert_eq!(id, 0);
}

#[test]
fn test_every_command_raises_repaint_and_is_logged() {
    let (mut controller, mut state, _) = setup();
    state.needs_repaint = false;

    send(&mut controller, &mut state, AppIntent::NetlistPreviewRequested);

    assert!(state.needs_repaint);
    assert!(state.ui.netlist_preview.is_some());
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::BuildNetlistPreview)
    ));

    send(&mut controller, &mut state, AppIntent::CloseNetlistPreviewRequested);
    assert!(state.ui.netlist_preview.is_none());
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let (mut controller, mut state, _) = setup();

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
}

fn options_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "circuit_schematic_editor_{}_{}.toml",
        name,
        std::process::id()
    ))
}

#[test]
fn test_zero_grid_size_option_still_snaps_placement() {
    let path = options_path("zero_grid");
    let (controller, mut state, _) = setup();
    let mut controller = controller.with_options_path(&path);
    let options = EditorOptions {
        grid_size: 0.0,
        ..EditorOptions::default()
    };

    send(
        &mut controller,
        &mut state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );
    let _ = std::fs::remove_file(&path);
    place(&mut controller, &mut state, ComponentType::Resistor, 103.0, 97.0);

    assert_eq!(state.options.grid_size, 20.0);
    let component = state
        .document
        .components()
        .next()
        .expect("Bauteil vorhanden");
    assert_eq!(component.position, Vec2::new(100.0, 100.0));
}

#[test]
fn test_options_save_failure_keeps_options_and_repaints() {
    let path = std::env::temp_dir()
        .join("circuit_schematic_editor_missing_dir")
        .join("options.toml");
    let _ = std::fs::remove_dir_all(path.parent().expect("Elternverzeichnis"));
    let (controller, mut state, inbox) = setup();
    let mut controller = controller.with_options_path(&path);
    state.needs_repaint = false;
    let options = EditorOptions {
        grid_size: 40.0,
        ..EditorOptions::default()
    };

    send(
        &mut controller,
        &mut state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert_eq!(state.options.grid_size, 40.0);
    assert!(state.needs_repaint);
    assert_eq!(inbox.len(), 1, "Speicherfehler wird genau einmal gemeldet");
}
