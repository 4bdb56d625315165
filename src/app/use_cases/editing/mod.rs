//! Use-Case-Funktionen für das Bearbeiten des Schaltungsdokuments.
//!
//! Aufgeteilt nach Operation:
//! - `place_component`: Bauteil auf dem Raster platzieren
//! - `delete_component`: Bauteil samt Leitungen löschen
//! - `reset`: Dokument und transienten Zustand zurücksetzen

mod delete_component;
mod place_component;
mod reset;

pub use delete_component::delete_component_at;
pub use place_component::place_component;
pub use reset::reset_document;
