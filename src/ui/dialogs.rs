//! Modale Fenster: Fehlermeldungen, Simulationsergebnis, Netzlisten-Vorschau.

use crate::app::{AppIntent, UiState};

/// Zeigt wartende Fehlermeldungen, bis der Benutzer sie bestätigt.
///
/// `pending` hält die noch nicht bestätigten Meldungen über Frames hinweg.
pub fn show_notifications(ctx: &egui::Context, pending: &mut Vec<String>) {
    let Some(message) = pending.first() else {
        return;
    };

    let mut acknowledged = false;

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(message.as_str());
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                acknowledged = true;
            }
        });

    if acknowledged {
        pending.remove(0);
    }
}

/// Zeigt das Ergebnisfenster nach erfolgreicher Solver-Übergabe.
pub fn show_results_window(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.show_results {
        return events;
    }

    egui::Window::new("Simulation")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Die Schaltung wurde an den Solver übergeben.");
            ui.add_space(6.0);
            if ui.button("Schließen").clicked() {
                events.push(AppIntent::CloseResultsRequested);
            }
        });

    events
}

/// Zeigt die Netzlisten-Vorschau.
pub fn show_netlist_preview(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(netlist) = ui_state.netlist_preview.as_ref() else {
        return events;
    };

    egui::Window::new("Netzliste")
        .collapsible(false)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label(format!("Knoten: {}", netlist.node_count));
            ui.separator();
            if netlist.lines.is_empty() {
                ui.label("Keine Bauteile mit zwei Anschlüssen");
            } else {
                egui::ScrollArea::vertical()
                    .max_height(300.0)
                    .show(ui, |ui| {
                        ui.monospace(netlist.to_text());
                    });
            }
            ui.separator();
            if ui.button("Schließen").clicked() {
                events.push(AppIntent::CloseNetlistPreviewRequested);
            }
        });

    events
}
