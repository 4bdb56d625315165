//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod notifier;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, Werkzeug, Selektion, Simulation).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use crate::core::{CircuitDocument, ComponentType};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use notifier::{LogNotifier, NotificationInbox, Notifier};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, EditorTool, EditorToolState, RunControl, SelectionState, SimulationOutcome,
    SimulationState, UiState,
};
