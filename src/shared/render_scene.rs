//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{CircuitDocument, WireEndpoint};
use glam::Vec2;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Das aktuelle Dokument (Bauteile + Leitungen)
    pub document: Arc<CircuitDocument>,
    /// ID des selektierten Bauteils (Hervorhebung)
    pub selected_component_id: Option<u64>,
    /// Erster gewählter Anschluss des Wire-Tools
    pub pending_wire: Option<WireEndpoint>,
    /// Gummiband-Segment vom wartenden Anschluss zum Mauszeiger
    pub rubber_band: Option<[Vec2; 2]>,
    /// Laufzeit-Optionen für Farben, Raster, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob es etwas zu zeichnen gibt.
    pub fn has_content(&self) -> bool {
        !self.document.is_empty() || self.rubber_band.is_some()
    }
}
