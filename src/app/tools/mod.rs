//! Zustandsbehaftete Editor-Werkzeuge.
//!
//! Platzieren, Selektieren und Löschen sind zustandslos und werden direkt
//! im Intent-Mapping abgebildet. Nur das Verdrahten merkt sich etwas
//! zwischen zwei Klicks.

/// Zwei-Klick-Verdrahtung mit Gummiband-Vorschau.
pub mod wire_tool;

pub use wire_tool::{WirePick, WireTool};
