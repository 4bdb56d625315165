//! Core-Domänentypen: Bauteile, Leitungen, Dokument, Raster, Hit-Tests, Netzliste.

pub mod component;
pub mod document;
pub mod grid;
pub mod netlist;
pub mod wire;

pub use component::{Component, ComponentKind, ComponentType, Terminal};
pub use document::{CircuitDocument, DocumentError, DocumentSnapshot};
pub use grid::snap_to_grid;
pub use hit_test::{component_at, terminal_at, TERMINAL_HIT_RADIUS};
pub use netlist::{build_netlist, NodeMap, Netlist};
pub use wire::{Wire, WireEndpoint};
