//! Toolbar für Werkzeugauswahl, Simulation und Leeren.

use crate::app::{AppIntent, AppState, EditorTool};
use crate::core::ComponentType;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            for tool in EditorTool::ALL {
                // Gruppen: Auswahl | Bauteile | Leitung, Löschen
                if matches!(
                    tool,
                    EditorTool::Place(ComponentType::Resistor) | EditorTool::Wire
                ) {
                    ui.separator();
                }
                if ui
                    .add(egui::Button::new(tool.label()).selected(active == tool))
                    .clicked()
                {
                    events.push(AppIntent::SetEditorToolRequested { tool });
                }
            }

            ui.separator();

            let run_enabled = state.simulation.run_control.is_enabled();
            let run_label = if run_enabled { "▶ Run" } else { "⏳ Läuft..." };
            if ui
                .add_enabled(run_enabled, egui::Button::new(run_label))
                .clicked()
            {
                events.push(AppIntent::RunSimulationRequested);
            }

            if ui.button("Clear").clicked() {
                events.push(AppIntent::ClearRequested);
            }

            if ui.button("Netzliste").clicked() {
                events.push(AppIntent::NetlistPreviewRequested);
            }
        });
    });

    events
}
