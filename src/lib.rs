//! Circuit Schematic Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, LogNotifier,
    NotificationInbox, Notifier, SelectionState, UiState,
};
pub use core::{
    build_netlist, component_at, snap_to_grid, terminal_at, CircuitDocument, Component,
    ComponentKind, ComponentType, DocumentError, Netlist, NodeMap, Terminal, Wire, WireEndpoint,
};
pub use export::{build_payload, payload_to_json, HttpSolverClient, SolverClient, SolverPayload};
pub use shared::{EditorOptions, RenderScene};
