//! Use-Cases für Solver-Übergabe und Netzlisten-Vorschau.

use crate::app::notifier::Notifier;
use crate::app::state::SimulationOutcome;
use crate::app::AppState;
use crate::core::build_netlist;
use crate::export::{build_payload, SolverClient};

/// Übergibt das aktuelle Dokument an den Solver.
///
/// Während des Aufrufs ist die Run-Freigabe entzogen. Sie wird auf jedem
/// Ausgangspfad wiederhergestellt. Läuft bereits eine Simulation, passiert nichts.
pub fn run_simulation(state: &mut AppState, solver: &dyn SolverClient, notifier: &dyn Notifier) {
    let Some(_guard) = state.simulation.run_control.acquire() else {
        log::debug!("Simulation läuft bereits, Anfrage ignoriert");
        return;
    };

    let payload = build_payload(&state.document, state.options.analysis_frequency);
    log::info!(
        "Simulation gestartet: {} Bauteile, {} Leitungen",
        payload.components.len(),
        payload.wires.len()
    );

    match solver.submit(&payload) {
        Ok(()) => {
            state.simulation.last_outcome = Some(SimulationOutcome::Completed);
            state.ui.show_results = true;
            state.ui.status_message = Some("Simulation abgeschlossen".to_string());
        }
        Err(e) => {
            let message = format!("Simulation fehlgeschlagen: {:#}", e);
            notifier.report_failure(&message);
            state.simulation.last_outcome = Some(SimulationOutcome::Failed(message));
            state.ui.status_message = Some("Simulation fehlgeschlagen".to_string());
        }
    }
}

/// Erzeugt die Netzliste des aktuellen Dokuments und öffnet die Vorschau.
pub fn build_netlist_preview(state: &mut AppState) {
    let netlist = build_netlist(&state.document);
    log::info!(
        "Netzliste ({} Knoten):\n{}",
        netlist.node_count,
        netlist.to_text()
    );
    state.ui.netlist_preview = Some(netlist);
}
