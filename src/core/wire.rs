//! Repräsentiert eine Leitung zwischen zwei Bauteil-Anschlüssen.

use glam::Vec2;

use super::{Component, Terminal};

/// Ein Ende einer Leitung, festgehalten zum Erstellungszeitpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireEndpoint {
    /// Absolute Position des Anschlusses
    pub position: Vec2,
    /// ID des Bauteils
    pub component_id: u64,
    /// ID des Anschlusses innerhalb des Bauteils
    pub terminal_id: u32,
}

impl WireEndpoint {
    /// Erstellt einen Endpunkt aus Bauteil und Anschluss.
    pub fn new(component: &Component, terminal: &Terminal) -> Self {
        Self {
            position: terminal.position,
            component_id: component.id,
            terminal_id: terminal.id,
        }
    }
}

/// Eine Leitung zwischen zwei Anschlüssen verschiedener Bauteile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    /// Erster gewählter Anschluss
    pub start: WireEndpoint,
    /// Zweiter gewählter Anschluss
    pub end: WireEndpoint,
}

impl Wire {
    /// Prüft, ob die Leitung das Bauteil an einem ihrer Enden referenziert.
    pub fn touches(&self, component_id: u64) -> bool {
        self.start.component_id == component_id || self.end.component_id == component_id
    }
}
