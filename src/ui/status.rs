//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Bauteile: {} | Leitungen: {}",
                state.component_count(),
                state.wire_count()
            ));

            ui.separator();

            match state.document.ground_id() {
                Some(id) => ui.label(format!("Masse: Bauteil {}", id)),
                None => ui.label("Masse: keine"),
            };

            ui.separator();

            ui.label(format!("Werkzeug: {}", state.editor.active_tool.label()));

            if let Some(pending) = state.editor.wire_tool.pending() {
                ui.separator();
                ui.label(format!(
                    "Leitung ab Bauteil {} / Anschluss {}",
                    pending.component_id, pending.terminal_id
                ));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Raster: {}", state.options.grid_size));

                let recent = state.command_log.recent_edits(3);
                if !recent.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("Zuletzt: {}", recent.join(" · ")))
                            .color(egui::Color32::GRAY),
                    );
                }
            });
        });
    });
}
