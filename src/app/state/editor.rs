use crate::app::tools::WireTool;
use crate::core::ComponentType;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Bauteil per Klick selektieren
    #[default]
    Select,
    /// Ein Bauteil des gegebenen Typs platzieren
    Place(ComponentType),
    /// Zwei Anschlüsse mit einer Leitung verbinden
    Wire,
    /// Bauteil per Klick löschen
    Delete,
}

impl EditorTool {
    /// Alle Werkzeuge in Toolbar-Reihenfolge
    pub const ALL: [EditorTool; 8] = [
        EditorTool::Select,
        EditorTool::Place(ComponentType::Resistor),
        EditorTool::Place(ComponentType::VoltageSource),
        EditorTool::Place(ComponentType::Ground),
        EditorTool::Place(ComponentType::Inductor),
        EditorTool::Place(ComponentType::Capacitor),
        EditorTool::Wire,
        EditorTool::Delete,
    ];

    /// Beschriftung für die Toolbar.
    pub fn label(self) -> &'static str {
        match self {
            EditorTool::Select => "Auswahl",
            EditorTool::Place(ComponentType::Resistor) => "Widerstand",
            EditorTool::Place(ComponentType::VoltageSource) => "Spannungsquelle",
            EditorTool::Place(ComponentType::Ground) => "Masse",
            EditorTool::Place(ComponentType::Inductor) => "Spule",
            EditorTool::Place(ComponentType::Capacitor) => "Kondensator",
            EditorTool::Wire => "Leitung",
            EditorTool::Delete => "Löschen",
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Wire-Tool mit wartendem Anschluss (nur im Modus `Wire` belegt)
    pub wire_tool: WireTool,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Select,
            wire_tool: WireTool::new(),
        }
    }
}
