use crate::core::Netlist;

/// UI-bezogener Anwendungszustand (Fenster und Statuszeile)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob das Ergebnisfenster nach einer Simulation angezeigt wird
    pub show_results: bool,
    /// Netlist-Vorschau (None = Fenster geschlossen)
    pub netlist_preview: Option<Netlist>,
    /// Ob der Optionen-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Temporäre Statusnachricht für die Statuszeile
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen UI-Zustand ohne offene Fenster.
    pub fn new() -> Self {
        Self::default()
    }
}
