//! Solver-Payload: JSON-Abbild des Dokuments für den externen Solver.

use serde::{Deserialize, Serialize};

use crate::core::{CircuitDocument, Component, WireEndpoint};

/// Wurzelobjekt des Solver-Requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverPayload {
    /// Alle Bauteile in Erstellungsreihenfolge
    pub components: Vec<ComponentRecord>,
    /// Alle Leitungen in Erstellungsreihenfolge
    pub wires: Vec<WireRecord>,
    /// ID des Ground-Bauteils (`null` ohne Ground)
    pub ground_node_id: Option<u64>,
    /// Analysefrequenz in Hz (entfällt bei Gleichstrom)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

/// Ein Bauteil im Payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub component_type: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Fehlt bei Ground
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub terminals: Vec<TerminalRecord>,
}

/// Ein Anschluss im Payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalRecord {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Eine Leitung im Payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    pub start: EndpointRecord,
    pub end: EndpointRecord,
}

/// Ein Leitungsende im Payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRecord {
    pub x: f32,
    pub y: f32,
    pub component_id: u64,
    pub terminal_id: u32,
}

impl From<&Component> for ComponentRecord {
    fn from(component: &Component) -> Self {
        Self {
            id: component.id,
            component_type: component.component_type().as_str().to_string(),
            x: component.position.x,
            y: component.position.y,
            width: component.size.x,
            height: component.size.y,
            value: component.value(),
            terminals: component
                .terminals
                .iter()
                .map(|t| TerminalRecord {
                    id: t.id,
                    x: t.position.x,
                    y: t.position.y,
                })
                .collect(),
        }
    }
}

impl From<&WireEndpoint> for EndpointRecord {
    fn from(endpoint: &WireEndpoint) -> Self {
        Self {
            x: endpoint.position.x,
            y: endpoint.position.y,
            component_id: endpoint.component_id,
            terminal_id: endpoint.terminal_id,
        }
    }
}

/// Erstellt den Solver-Payload aus dem aktuellen Dokument-Snapshot.
pub fn build_payload(document: &CircuitDocument, frequency: Option<f64>) -> SolverPayload {
    let snapshot = document.snapshot();

    SolverPayload {
        components: snapshot
            .components
            .iter()
            .map(|c| ComponentRecord::from(*c))
            .collect(),
        wires: snapshot
            .wires
            .iter()
            .map(|w| WireRecord {
                start: EndpointRecord::from(&w.start),
                end: EndpointRecord::from(&w.end),
            })
            .collect(),
        ground_node_id: snapshot.ground_id,
        frequency,
    }
}

/// Serialisiert den Payload als JSON-Text.
pub fn payload_to_json(payload: &SolverPayload) -> anyhow::Result<String> {
    Ok(serde_json::to_string(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComponentType;
    use glam::Vec2;
    use serde_json::json;

    #[test]
    fn test_payload_json_shape_matches_solver_contract() {
        let mut doc = CircuitDocument::new();
        let r = doc
            .create_component(ComponentType::Resistor, Vec2::new(100.0, 100.0))
            .expect("Platzierung")
            .id;
        let g = doc
            .create_component(ComponentType::Ground, Vec2::new(200.0, 100.0))
            .expect("Platzierung")
            .id;
        doc.create_wire(r, 1, g, 0).expect("Leitung");

        let value = serde_json::to_value(build_payload(&doc, None)).expect("JSON");

        assert_eq!(
            value,
            json!({
                "components": [
                    {
                        "id": 0, "type": "resistor",
                        "x": 100.0, "y": 100.0, "width": 60.0, "height": 40.0,
                        "value": 1000.0,
                        "terminals": [
                            {"id": 0, "x": 100.0, "y": 120.0},
                            {"id": 1, "x": 160.0, "y": 120.0}
                        ]
                    },
                    {
                        "id": 1, "type": "ground",
                        "x": 200.0, "y": 100.0, "width": 40.0, "height": 40.0,
                        "terminals": [{"id": 0, "x": 220.0, "y": 100.0}]
                    }
                ],
                "wires": [
                    {
                        "start": {"x": 160.0, "y": 120.0, "componentId": 0, "terminalId": 1},
                        "end": {"x": 220.0, "y": 100.0, "componentId": 1, "terminalId": 0}
                    }
                ],
                "groundNodeId": 1
            })
        );
    }

    #[test]
    fn test_missing_ground_serializes_as_null_and_frequency_is_forwarded() {
        let doc = CircuitDocument::new();

        let value = serde_json::to_value(build_payload(&doc, Some(1000.0))).expect("JSON");

        assert_eq!(value["groundNodeId"], serde_json::Value::Null);
        assert_eq!(value["frequency"], json!(1000.0));
        assert_eq!(value["components"], json!([]));
    }
}
