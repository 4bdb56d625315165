//! Wire-Tool: Zwei-Klick-Protokoll zum Verbinden von Anschlüssen.

use glam::Vec2;

use crate::core::{component_at, terminal_at, CircuitDocument, WireEndpoint};

/// Ergebnis eines Klicks mit dem Wire-Tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WirePick {
    /// Kein Anschluss unter dem Zeiger
    Missed,
    /// Erster Anschluss gewählt, wartet auf den zweiten
    Pending(WireEndpoint),
    /// Zweiter Anschluss gewählt, Leitung kann angelegt werden
    Completed {
        start: WireEndpoint,
        end: WireEndpoint,
    },
}

/// Zustand des Wire-Tools: wartender Anschluss und Zeigerposition für das Gummiband.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireTool {
    pending: Option<WireEndpoint>,
    cursor: Option<Vec2>,
}

impl WireTool {
    /// Erstellt ein Wire-Tool ohne wartenden Anschluss.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet einen Klick.
    ///
    /// Getroffen wird nur ein Anschluss des obersten Bauteils unter dem Zeiger.
    /// Nach dem zweiten Treffer ist der wartende Anschluss immer verbraucht,
    /// unabhängig davon, ob das Dokument die Leitung annimmt.
    pub fn pick(&mut self, document: &CircuitDocument, point: Vec2, radius: f32) -> WirePick {
        let hit = component_at(document, point).and_then(|component| {
            terminal_at(component, point, radius).map(|t| WireEndpoint::new(component, t))
        });

        let Some(hit) = hit else {
            return WirePick::Missed;
        };

        match self.pending.take() {
            Some(start) => {
                self.cursor = None;
                WirePick::Completed { start, end: hit }
            }
            None => {
                self.pending = Some(hit);
                self.cursor = Some(point);
                WirePick::Pending(hit)
            }
        }
    }

    /// Aktualisiert die Zeigerposition. Nur wirksam, solange ein Anschluss wartet.
    pub fn track_cursor(&mut self, point: Vec2) -> bool {
        if self.pending.is_none() {
            return false;
        }
        self.cursor = Some(point);
        true
    }

    /// Wartender erster Anschluss.
    pub fn pending(&self) -> Option<&WireEndpoint> {
        self.pending.as_ref()
    }

    /// Gummiband-Segment vom wartenden Anschluss zur Zeigerposition.
    pub fn rubber_band(&self) -> Option<[Vec2; 2]> {
        match (self.pending, self.cursor) {
            (Some(start), Some(cursor)) => Some([start.position, cursor]),
            _ => None,
        }
    }

    /// Verwirft wartenden Anschluss und Gummiband.
    pub fn reset(&mut self) {
        self.pending = None;
        self.cursor = None;
    }
}
