//! Bauteile des Schaltplans: Typ-Tabelle, Werte und Anschlüsse.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Bauteil-Typ ohne Wert (Werkzeug-Auswahl, Typ-Tabelle, Export-Name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Ohmscher Widerstand
    Resistor,
    /// Ideale Spannungsquelle
    VoltageSource,
    /// Masse-Bezugspunkt (höchstens einer pro Dokument)
    Ground,
    /// Spule
    Inductor,
    /// Kondensator
    Capacitor,
}

impl ComponentType {
    /// Alle Typen in Toolbar-Reihenfolge.
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Resistor,
        ComponentType::VoltageSource,
        ComponentType::Ground,
        ComponentType::Inductor,
        ComponentType::Capacitor,
    ];

    /// Feste Footprint-Größe (Breite, Höhe) in Canvas-Einheiten.
    pub fn footprint(self) -> Vec2 {
        match self {
            ComponentType::Resistor | ComponentType::Inductor | ComponentType::Capacitor => {
                Vec2::new(60.0, 40.0)
            }
            ComponentType::VoltageSource => Vec2::new(40.0, 60.0),
            ComponentType::Ground => Vec2::new(40.0, 40.0),
        }
    }

    /// Anschluss-Offsets relativ zur linken oberen Ecke, Index = Terminal-ID.
    pub fn terminal_offsets(self) -> &'static [Vec2] {
        const HORIZONTAL: [Vec2; 2] = [Vec2::new(0.0, 20.0), Vec2::new(60.0, 20.0)];
        const VERTICAL: [Vec2; 2] = [Vec2::new(20.0, 0.0), Vec2::new(20.0, 60.0)];
        const GROUND: [Vec2; 1] = [Vec2::new(20.0, 0.0)];

        match self {
            ComponentType::Resistor | ComponentType::Inductor | ComponentType::Capacitor => {
                &HORIZONTAL
            }
            ComponentType::VoltageSource => &VERTICAL,
            ComponentType::Ground => &GROUND,
        }
    }

    /// Startwert eines frisch platzierten Bauteils.
    pub fn default_kind(self) -> ComponentKind {
        match self {
            ComponentType::Resistor => ComponentKind::Resistor { ohms: 1000.0 },
            ComponentType::VoltageSource => ComponentKind::VoltageSource { volts: 5.0 },
            ComponentType::Ground => ComponentKind::Ground,
            ComponentType::Inductor => ComponentKind::Inductor { henries: 0.001 },
            ComponentType::Capacitor => ComponentKind::Capacitor { farads: 0.000_001 },
        }
    }

    /// Name im Solver-Payload.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Resistor => "resistor",
            ComponentType::VoltageSource => "voltage_source",
            ComponentType::Ground => "ground",
            ComponentType::Inductor => "inductor",
            ComponentType::Capacitor => "capacitor",
        }
    }

    /// Einheit des editierbaren Werts (leer für Ground).
    pub fn unit(self) -> &'static str {
        match self {
            ComponentType::Resistor => "Ω",
            ComponentType::VoltageSource => "V",
            ComponentType::Ground => "",
            ComponentType::Inductor => "H",
            ComponentType::Capacitor => "F",
        }
    }
}

/// Typ-spezifische Bauteildaten. Der Wert hängt am Variant, Ground hat keinen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentKind {
    /// Widerstand in Ohm
    Resistor { ohms: f64 },
    /// Quellspannung in Volt
    VoltageSource { volts: f64 },
    /// Induktivität in Henry
    Inductor { henries: f64 },
    /// Kapazität in Farad
    Capacitor { farads: f64 },
    /// Masse
    Ground,
}

impl ComponentKind {
    /// Zugehöriger Typ.
    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentKind::Resistor { .. } => ComponentType::Resistor,
            ComponentKind::VoltageSource { .. } => ComponentType::VoltageSource,
            ComponentKind::Inductor { .. } => ComponentType::Inductor,
            ComponentKind::Capacitor { .. } => ComponentType::Capacitor,
            ComponentKind::Ground => ComponentType::Ground,
        }
    }

    /// Editierbarer Zahlenwert, `None` für wertlose Typen.
    pub fn value(&self) -> Option<f64> {
        match *self {
            ComponentKind::Resistor { ohms } => Some(ohms),
            ComponentKind::VoltageSource { volts } => Some(volts),
            ComponentKind::Inductor { henries } => Some(henries),
            ComponentKind::Capacitor { farads } => Some(farads),
            ComponentKind::Ground => None,
        }
    }

    fn value_mut(&mut self) -> Option<&mut f64> {
        match self {
            ComponentKind::Resistor { ohms } => Some(ohms),
            ComponentKind::VoltageSource { volts } => Some(volts),
            ComponentKind::Inductor { henries } => Some(henries),
            ComponentKind::Capacitor { farads } => Some(farads),
            ComponentKind::Ground => None,
        }
    }

    /// Überschreibt den Wert. Gibt `false` zurück, wenn der Typ keinen Wert hat.
    pub fn set_value(&mut self, value: f64) -> bool {
        match self.value_mut() {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Anschlusspunkt eines Bauteils (absolute Position, bei Erstellung berechnet)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminal {
    /// Eindeutig innerhalb des Bauteils, Reihenfolge entscheidet Gleichstände
    pub id: u32,
    /// Absolute Canvas-Position
    pub position: Vec2,
}

/// Platziertes Bauteil
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Dokumentweit eindeutige, nie wiederverwendete ID
    pub id: u64,
    /// Typ inklusive Wert
    pub kind: ComponentKind,
    /// Linke obere Ecke (am Raster ausgerichtet)
    pub position: Vec2,
    /// Footprint-Größe
    pub size: Vec2,
    /// Anschlüsse, aufsteigend nach ID
    pub terminals: Vec<Terminal>,
}

impl Component {
    /// Erstellt ein Bauteil mit Footprint, Startwert und Anschlüssen laut Typ-Tabelle.
    pub fn new(id: u64, component_type: ComponentType, position: Vec2) -> Self {
        let terminals = component_type
            .terminal_offsets()
            .iter()
            .enumerate()
            .map(|(index, offset)| Terminal {
                id: index as u32,
                position: position + *offset,
            })
            .collect();

        Self {
            id,
            kind: component_type.default_kind(),
            position,
            size: component_type.footprint(),
            terminals,
        }
    }

    /// Typ des Bauteils.
    pub fn component_type(&self) -> ComponentType {
        self.kind.component_type()
    }

    /// Wert des Bauteils (None für Ground).
    pub fn value(&self) -> Option<f64> {
        self.kind.value()
    }

    /// Sucht einen Anschluss über seine ID.
    pub fn terminal(&self, terminal_id: u32) -> Option<&Terminal> {
        self.terminals.iter().find(|t| t.id == terminal_id)
    }

    /// Prüft, ob der Punkt in der Bounding-Box liegt (Ränder eingeschlossen).
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.position + self.size;
        point.x >= self.position.x
            && point.x <= max.x
            && point.y >= self.position.y
            && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_layout_matches_type_table() {
        let comp = Component::new(0, ComponentType::Resistor, Vec2::new(100.0, 100.0));

        assert_eq!(comp.size, Vec2::new(60.0, 40.0));
        assert_eq!(comp.value(), Some(1000.0));
        assert_eq!(comp.terminals.len(), 2);
        assert_eq!(comp.terminals[0].position, Vec2::new(100.0, 120.0));
        assert_eq!(comp.terminals[1].position, Vec2::new(160.0, 120.0));
    }

    #[test]
    fn test_ground_has_single_terminal_and_no_value() {
        let mut comp = Component::new(3, ComponentType::Ground, Vec2::ZERO);

        assert_eq!(comp.terminals.len(), 1);
        assert_eq!(comp.value(), None);
        assert!(!comp.kind.set_value(12.0));
    }

    #[test]
    fn test_contains_includes_edges() {
        let comp = Component::new(0, ComponentType::VoltageSource, Vec2::new(20.0, 20.0));

        assert!(comp.contains(Vec2::new(20.0, 20.0)));
        assert!(comp.contains(Vec2::new(60.0, 80.0)));
        assert!(!comp.contains(Vec2::new(60.1, 80.0)));
    }

    #[test]
    fn test_export_names_are_snake_case() {
        let names: Vec<&str> = ComponentType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec!["resistor", "voltage_source", "ground", "inductor", "capacitor"]
        );
    }
}
