/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Aktuell selektiertes Bauteil (höchstens eines)
    pub selected_component_id: Option<u64>,
    /// Inhalt des Wert-Eingabefelds im Eigenschaften-Panel
    pub value_text: String,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die Selektion auf und leert das Eingabefeld.
    pub fn clear(&mut self) {
        self.selected_component_id = None;
        self.value_text.clear();
    }

    /// Gibt `true` zurück, wenn das Bauteil selektiert ist.
    pub fn is_selected(&self, component_id: u64) -> bool {
        self.selected_component_id == Some(component_id)
    }
}
