//! Handler für Selektion und Wertbearbeitung.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert das Bauteil unter dem Zeiger.
pub fn select_component_at(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::select_component_at(state, world_pos);
}

/// Schreibt den eingegebenen Wert in das selektierte Bauteil.
pub fn set_selected_value(state: &mut AppState, text: String) {
    use_cases::selection::set_selected_value(state, text);
}
