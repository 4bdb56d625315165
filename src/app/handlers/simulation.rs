//! Handler für Solver-Übergabe und Netzlisten-Vorschau.

use crate::app::notifier::Notifier;
use crate::app::use_cases;
use crate::app::AppState;
use crate::export::SolverClient;

/// Übergibt das Dokument an den Solver.
pub fn run(state: &mut AppState, solver: &dyn SolverClient, notifier: &dyn Notifier) {
    use_cases::simulation::run_simulation(state, solver, notifier);
}

/// Erzeugt die Netzlisten-Vorschau.
pub fn build_netlist_preview(state: &mut AppState) {
    use_cases::simulation::build_netlist_preview(state);
}
