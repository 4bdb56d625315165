use super::super::state::EditorTool;
use crate::core::ComponentType;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Bauteil an Weltposition platzieren (wird auf das Raster gezogen)
    PlaceComponent {
        component_type: ComponentType,
        world_pos: glam::Vec2,
    },
    /// Wire-Tool: Anschluss anwählen (erster oder zweiter Klick)
    WireToolPick {
        world_pos: glam::Vec2,
        max_distance: f32,
    },
    /// Gummiband des Wire-Tools nachführen
    UpdateRubberBand { world_pos: glam::Vec2 },
    /// Oberstes Bauteil an Weltposition selektieren
    SelectComponentAt { world_pos: glam::Vec2 },
    /// Oberstes Bauteil an Weltposition löschen
    DeleteComponentAt { world_pos: glam::Vec2 },
    /// Wert des selektierten Bauteils aus Texteingabe setzen
    SetSelectedValue { text: String },
    /// Dokument an den Solver übergeben
    RunSimulation,
    /// Dokument und transienten Zustand zurücksetzen
    ResetDocument,
    /// Ergebnisfenster schließen
    CloseResults,
    /// Netzliste aus dem Dokument erzeugen und anzeigen
    BuildNetlistPreview,
    /// Netzlisten-Vorschau schließen
    CloseNetlistPreview,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
