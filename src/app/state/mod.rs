//! Application State: zentrale Datenhaltung, aufgeteilt nach Bereich.

mod app_state;
mod dialogs;
mod editor;
mod selection;
mod simulation;

pub use app_state::AppState;
pub use dialogs::UiState;
pub use editor::{EditorTool, EditorToolState};
pub use selection::SelectionState;
pub use simulation::{RunControl, RunGuard, SimulationOutcome, SimulationState};
