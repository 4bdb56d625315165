use super::super::state::EditorTool;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Werkzeug in der Toolbar gewählt
    SetEditorToolRequested { tool: EditorTool },
    /// Primärklick auf die Zeichenfläche (Weltkoordinaten)
    CanvasPointerDown { world_pos: glam::Vec2 },
    /// Zeiger über der Zeichenfläche bewegt
    CanvasPointerMoved { world_pos: glam::Vec2 },
    /// Wert-Eingabefeld im Eigenschaften-Panel geändert
    SelectedValueEdited { text: String },
    /// Run-Button gedrückt
    RunSimulationRequested,
    /// Clear-Button gedrückt
    ClearRequested,
    /// Ergebnisfenster schließen
    CloseResultsRequested,
    /// Netzlisten-Vorschau öffnen
    NetlistPreviewRequested,
    /// Netzlisten-Vorschau schließen
    CloseNetlistPreviewRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen übernehmen und speichern
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
