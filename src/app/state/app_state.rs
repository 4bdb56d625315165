use crate::app::CommandLog;
use crate::core::CircuitDocument;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, SelectionState, SimulationState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Schaltungsdokument (Arc für O(1)-Clone in RenderScene)
    pub document: Arc<CircuitDocument>,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Selection-State
    pub selection: SelectionState,
    /// Simulation-State (Run-Freigabe, letztes Ergebnis)
    pub simulation: SimulationState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Raster, Trefferradius, Solver, Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host, dass neu gezeichnet werden muss
    pub needs_repaint: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Dokument
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: Arc::new(CircuitDocument::new()),
            editor: EditorToolState::new(),
            selection: SelectionState::new(),
            simulation: SimulationState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: options.sanitized(),
            needs_repaint: true,
            should_exit: false,
        }
    }

    /// Mutabler Zugriff auf das Dokument (CoW: klont nur, wenn eine RenderScene es noch hält).
    pub fn document_mut(&mut self) -> &mut CircuitDocument {
        Arc::make_mut(&mut self.document)
    }

    /// Gibt die Anzahl der Bauteile zurück (für UI-Anzeige)
    pub fn component_count(&self) -> usize {
        self.document.component_count()
    }

    /// Gibt die Anzahl der Leitungen zurück (für UI-Anzeige)
    pub fn wire_count(&self) -> usize {
        self.document.wire_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
