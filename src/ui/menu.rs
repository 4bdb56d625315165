//! Top-Menü (Datei, Bearbeiten, Simulation).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui
                    .add_enabled(!state.document.is_empty(), egui::Button::new("Leeren"))
                    .clicked()
                {
                    events.push(AppIntent::ClearRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Simulation", |ui| {
                if ui
                    .add_enabled(
                        state.simulation.run_control.is_enabled(),
                        egui::Button::new("Starten"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::RunSimulationRequested);
                    ui.close();
                }

                if ui.button("Netzliste anzeigen").clicked() {
                    events.push(AppIntent::NetlistPreviewRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
