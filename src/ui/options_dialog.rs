//! Optionen-Dialog für Raster, Trefferradius, Solver und Farben.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.collapsing("Raster", |ui| {
                changed |= ui.checkbox(&mut opts.show_grid, "Raster anzeigen").changed();
                ui.horizontal(|ui| {
                    ui.label("Rasterweite:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.grid_size)
                                .range(5.0..=100.0)
                                .speed(1.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Anschluss-Trefferradius:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.terminal_hit_radius)
                                .range(2.0..=50.0)
                                .speed(0.5),
                        )
                        .changed();
                });
            });

            ui.collapsing("Solver", |ui| {
                ui.horizontal(|ui| {
                    ui.label("URL:");
                    changed |= ui.text_edit_singleline(&mut opts.solver_url).changed();
                });
                let mut ac = opts.analysis_frequency.is_some();
                if ui.checkbox(&mut ac, "Wechselstrom-Analyse").changed() {
                    opts.analysis_frequency = ac.then_some(50.0);
                    changed = true;
                }
                if let Some(frequency) = opts.analysis_frequency.as_mut() {
                    ui.horizontal(|ui| {
                        ui.label("Frequenz (Hz):");
                        changed |= ui
                            .add(
                                egui::DragValue::new(frequency)
                                    .range(0.001..=1.0e9)
                                    .speed(1.0),
                            )
                            .changed();
                    });
                }
            });

            ui.collapsing("Farben", |ui| {
                changed |= color_edit(ui, "Raster:", &mut opts.grid_color);
                changed |= color_edit(ui, "Bauteil:", &mut opts.component_color);
                changed |= color_edit(ui, "Selektiert:", &mut opts.selection_color);
                changed |= color_edit(ui, "Leitung:", &mut opts.wire_color);
                changed |= color_edit(ui, "Gummiband:", &mut opts.rubber_band_color);
                changed |= color_edit(ui, "Anschluss:", &mut opts.terminal_color);
                ui.horizontal(|ui| {
                    ui.label("Leitungsbreite:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.wire_thickness)
                                .range(0.5..=8.0)
                                .speed(0.1),
                        )
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
