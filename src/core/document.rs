//! Das zentrale Schaltplan-Dokument mit Bauteilen, Leitungen und Ground-Referenz.

use glam::Vec2;
use indexmap::IndexMap;
use thiserror::Error;

use super::{Component, ComponentType, Wire, WireEndpoint};

/// Abgelehnte Dokument-Operationen. Bei einem Fehler bleibt das Dokument unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Zweiter Ground-Versuch
    #[error("Es ist nur ein Ground erlaubt (vorhanden: Bauteil {existing})")]
    DuplicateGround { existing: u64 },
    /// Beide Leitungsenden am selben Bauteil
    #[error("Leitung an Bauteil {component_id} mit sich selbst ist nicht erlaubt")]
    SelfConnection { component_id: u64 },
    /// Bauteil oder Anschluss existiert nicht
    #[error("Anschluss {terminal_id} an Bauteil {component_id} existiert nicht")]
    UnknownTerminal { component_id: u64, terminal_id: u32 },
}

/// Read-only Sicht auf den aktuellen Dokumentinhalt (Rendering, Export).
#[derive(Debug, Clone)]
pub struct DocumentSnapshot<'a> {
    /// Bauteile in Erstellungsreihenfolge
    pub components: Vec<&'a Component>,
    /// Leitungen in Erstellungsreihenfolge
    pub wires: &'a [Wire],
    /// ID des Ground-Bauteils (falls vorhanden)
    pub ground_id: Option<u64>,
}

/// Autoritativer Zustand aller Schaltplan-Entitäten.
///
/// Alle Mutationen laufen über die Methoden dieses Typs, damit die Invarianten
/// (eindeutige IDs, ein Ground, gültige Leitungsenden, Kaskaden-Löschung)
/// an einer Stelle durchgesetzt werden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircuitDocument {
    /// Bauteile nach ID, Einfügereihenfolge = Erstellungsreihenfolge
    components: IndexMap<u64, Component>,
    wires: Vec<Wire>,
    ground_id: Option<u64>,
    next_component_id: u64,
}

impl CircuitDocument {
    /// Erstellt ein leeres Dokument (ID-Zähler bei 0).
    pub fn new() -> Self {
        Self {
            components: IndexMap::new(),
            wires: Vec::new(),
            ground_id: None,
            next_component_id: 0,
        }
    }

    /// Legt ein neues Bauteil an der (bereits eingerasteten) Position an.
    pub fn create_component(
        &mut self,
        component_type: ComponentType,
        position: Vec2,
    ) -> Result<&Component, DocumentError> {
        if component_type == ComponentType::Ground {
            if let Some(existing) = self.ground_id {
                return Err(DocumentError::DuplicateGround { existing });
            }
        }

        let id = self.next_component_id;
        self.next_component_id += 1;

        if component_type == ComponentType::Ground {
            self.ground_id = Some(id);
        }

        let component = Component::new(id, component_type, position);
        Ok(self.components.entry(id).or_insert(component))
    }

    /// Entfernt ein Bauteil inklusive aller Leitungen, die es referenzieren.
    ///
    /// Unbekannte IDs sind ein No-op.
    pub fn delete_component(&mut self, id: u64) -> Option<Component> {
        let removed = self.components.shift_remove(&id)?;
        self.wires.retain(|wire| !wire.touches(id));
        if self.ground_id == Some(id) {
            self.ground_id = None;
        }
        Some(removed)
    }

    /// Verbindet zwei Anschlüsse verschiedener Bauteile.
    pub fn create_wire(
        &mut self,
        component_a: u64,
        terminal_a: u32,
        component_b: u64,
        terminal_b: u32,
    ) -> Result<&Wire, DocumentError> {
        if component_a == component_b {
            return Err(DocumentError::SelfConnection {
                component_id: component_a,
            });
        }

        let start = self.endpoint(component_a, terminal_a)?;
        let end = self.endpoint(component_b, terminal_b)?;

        self.wires.push(Wire { start, end });
        let index = self.wires.len() - 1;
        Ok(&self.wires[index])
    }

    fn endpoint(&self, component_id: u64, terminal_id: u32) -> Result<WireEndpoint, DocumentError> {
        self.components
            .get(&component_id)
            .and_then(|c| c.terminal(terminal_id).map(|t| WireEndpoint::new(c, t)))
            .ok_or(DocumentError::UnknownTerminal {
                component_id,
                terminal_id,
            })
    }

    /// Setzt den Wert eines Bauteils. `false` bei unbekannter ID oder wertlosem Typ.
    pub fn set_component_value(&mut self, id: u64, value: f64) -> bool {
        self.components
            .get_mut(&id)
            .is_some_and(|c| c.kind.set_value(value))
    }

    /// Setzt das Dokument auf den leeren Ausgangszustand zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Liefert eine unveränderliche Sicht auf Bauteile und Leitungen.
    pub fn snapshot(&self) -> DocumentSnapshot<'_> {
        DocumentSnapshot {
            components: self.components.values().collect(),
            wires: &self.wires,
            ground_id: self.ground_id,
        }
    }

    /// Findet ein Bauteil über seine ID.
    pub fn component(&self, id: u64) -> Option<&Component> {
        self.components.get(&id)
    }

    /// Iterator über alle Bauteile in Erstellungsreihenfolge.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &Component> {
        self.components.values()
    }

    /// Alle Leitungen in Erstellungsreihenfolge.
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// ID des Ground-Bauteils.
    pub fn ground_id(&self) -> Option<u64> {
        self.ground_id
    }

    /// ID, die das nächste Bauteil erhalten wird.
    pub fn next_component_id(&self) -> u64 {
        self.next_component_id
    }

    /// Gibt die Anzahl der Bauteile zurück.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Gibt die Anzahl der Leitungen zurück.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Gibt `true` zurück, wenn weder Bauteile noch Leitungen existieren.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.wires.is_empty()
    }
}
