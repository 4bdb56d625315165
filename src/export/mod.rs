//! Export des Dokuments: Solver-Payload (JSON) und Solver-Anbindung.

pub mod payload;
pub mod solver;

pub use payload::{
    build_payload, payload_to_json, ComponentRecord, EndpointRecord, SolverPayload,
    TerminalRecord, WireRecord,
};
pub use solver::{HttpSolverClient, SolverClient};
