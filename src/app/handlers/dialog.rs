//! Handler für Fenster-State, Optionen und Anwendungssteuerung.

use std::path::Path;

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt das Ergebnisfenster.
pub fn close_results(state: &mut AppState) {
    state.ui.show_results = false;
}

/// Schließt die Netzlisten-Vorschau.
pub fn close_netlist_preview(state: &mut AppState) {
    state.ui.netlist_preview = None;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie unter `path`.
///
/// Die Optionen gelten auch dann, wenn das Speichern fehlschlägt.
pub fn apply_options(
    state: &mut AppState,
    options: EditorOptions,
    path: &Path,
) -> anyhow::Result<()> {
    state.options = options.sanitized();
    state.options.save_to_file(path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie unter `path`.
pub fn reset_options(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(path)
}
