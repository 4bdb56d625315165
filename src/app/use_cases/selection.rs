//! Use-Cases für Einzelselektion und Wertbearbeitung.

use crate::app::AppState;
use crate::core::component_at;

/// Selektiert das oberste Bauteil an der Weltposition oder hebt die Selektion auf.
///
/// Das Eingabefeld wird mit dem aktuellen Wert des Bauteils vorbelegt
/// (leer bei Bauteilen ohne Wert).
pub fn select_component_at(state: &mut AppState, world_pos: glam::Vec2) {
    let Some(component) = component_at(&state.document, world_pos) else {
        state.selection.clear();
        log::debug!("Selektion aufgehoben");
        return;
    };

    let id = component.id;
    let value_text = component.value().map(format_value).unwrap_or_default();

    state.selection.selected_component_id = Some(id);
    state.selection.value_text = value_text;
    log::info!("Bauteil {} selektiert", id);
}

/// Übernimmt die Texteingabe als Wert des selektierten Bauteils.
///
/// Nicht interpretierbare oder nicht endliche Eingaben werden als `0` übernommen.
/// Der eingegebene Text bleibt unverändert im Eingabefeld.
/// Gibt `true` zurück, wenn ein Wert geschrieben wurde.
pub fn set_selected_value(state: &mut AppState, text: String) -> bool {
    let Some(id) = state.selection.selected_component_id else {
        return false;
    };

    let value = parse_value(&text);
    state.selection.value_text = text;

    let written = state.document_mut().set_component_value(id, value);
    if written {
        log::info!("Wert von Bauteil {} auf {} gesetzt", id, value);
    } else {
        log::debug!("Bauteil {} hat keinen editierbaren Wert", id);
    }
    written
}

/// Interpretiert eine Texteingabe als Zahl, sonst `0`.
pub fn parse_value(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn format_value(value: f64) -> String {
    format!("{}", value)
}
