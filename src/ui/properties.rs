//! Properties-Panel (rechte Seitenleiste) für das selektierte Bauteil.

use crate::app::{AppIntent, AppState};
use crate::core::Component;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(200.0)
        .min_width(160.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            let selected = state
                .selection
                .selected_component_id
                .and_then(|id| state.document.component(id));

            match selected {
                Some(component) => {
                    render_component_info(ui, component, &state.selection.value_text, &mut events)
                }
                None => {
                    ui.label("Keine Selektion");
                }
            }
        });

    events
}

fn render_component_info(
    ui: &mut egui::Ui,
    component: &Component,
    value_text: &str,
    events: &mut Vec<AppIntent>,
) {
    let component_type = component.component_type();

    ui.label(format!("Bauteil-ID: {}", component.id));
    ui.label(format!("Typ: {}", component_type.as_str()));
    ui.label(format!(
        "Position: ({:.0}, {:.0})",
        component.position.x, component.position.y
    ));
    ui.label(format!("Anschlüsse: {}", component.terminals.len()));

    // Masse hat keinen editierbaren Wert
    if component.value().is_none() {
        return;
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Wert:");
        let mut text = value_text.to_string();
        if ui.text_edit_singleline(&mut text).changed() {
            events.push(AppIntent::SelectedValueEdited { text });
        }
        ui.label(component_type.unit());
    });
}
