//! Elektrische Knoten aus der Verdrahtung ableiten und als SPICE-Netzliste ausgeben.
//!
//! Anschlüsse, die über Leitungen verbunden sind, bilden einen Knoten.
//! Alle Anschlüsse des Ground-Bauteils liegen auf Knoten 0.

use std::collections::HashMap;

use super::{CircuitDocument, ComponentType};

/// Schlüssel eines Anschlusses: (Bauteil-ID, Terminal-ID)
pub type TerminalKey = (u64, u32);

/// Union-Find über Anschluss-Indizes.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}

/// Zuordnung Anschluss → elektrischer Knoten (0 = Ground)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMap {
    nodes: HashMap<TerminalKey, usize>,
    node_count: usize,
}

impl NodeMap {
    /// Gruppiert alle Anschlüsse des Dokuments zu Knoten.
    ///
    /// Knotennummern ab 1 werden in Reihenfolge des ersten Auftretens vergeben
    /// (Bauteile in Erstellungsreihenfolge, Anschlüsse nach ID).
    pub fn build(document: &CircuitDocument) -> Self {
        let keys: Vec<TerminalKey> = document
            .components()
            .flat_map(|c| c.terminals.iter().map(move |t| (c.id, t.id)))
            .collect();
        let index_of: HashMap<TerminalKey, usize> =
            keys.iter().enumerate().map(|(i, key)| (*key, i)).collect();

        let mut set = DisjointSet::new(keys.len());
        for wire in document.wires() {
            let start = index_of.get(&(wire.start.component_id, wire.start.terminal_id));
            let end = index_of.get(&(wire.end.component_id, wire.end.terminal_id));
            if let (Some(&a), Some(&b)) = (start, end) {
                set.union(a, b);
            }
        }

        let ground_roots: Vec<usize> = match document.ground_id() {
            Some(ground_id) => keys
                .iter()
                .enumerate()
                .filter(|(_, (cid, _))| *cid == ground_id)
                .map(|(i, _)| set.find(i))
                .collect(),
            None => Vec::new(),
        };

        let mut root_to_node: HashMap<usize, usize> = HashMap::new();
        let mut next_node = 1;
        let mut nodes = HashMap::with_capacity(keys.len());

        for (index, key) in keys.iter().enumerate() {
            let root = set.find(index);
            let node = *root_to_node.entry(root).or_insert_with(|| {
                if ground_roots.contains(&root) {
                    0
                } else {
                    next_node += 1;
                    next_node - 1
                }
            });
            nodes.insert(*key, node);
        }

        Self {
            nodes,
            node_count: next_node,
        }
    }

    /// Knoten eines Anschlusses.
    pub fn node_of(&self, component_id: u64, terminal_id: u32) -> Option<usize> {
        self.nodes.get(&(component_id, terminal_id)).copied()
    }

    /// Anzahl der Knoten inklusive Ground-Knoten 0.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

/// Textuelle Netzliste (eine Zeile pro zweipoligem Bauteil)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Netlist {
    /// Zeilen im Format `R1 <n1> <n2> <wert>`
    pub lines: Vec<String>,
    /// Anzahl der Knoten inklusive Ground
    pub node_count: usize,
}

impl Netlist {
    /// Gibt die Netzliste als mehrzeiligen Text aus.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}

/// Erzeugt die Netzliste. Einpolige Bauteile (Ground) werden übersprungen.
pub fn build_netlist(document: &CircuitDocument) -> Netlist {
    let node_map = NodeMap::build(document);
    let mut counters: HashMap<char, usize> = HashMap::new();
    let mut lines = Vec::new();

    for component in document.components() {
        let [first, second, ..] = component.terminals.as_slice() else {
            continue;
        };
        let Some(prefix) = spice_prefix(component.component_type()) else {
            continue;
        };

        let n1 = node_map.node_of(component.id, first.id).unwrap_or(0);
        let n2 = node_map.node_of(component.id, second.id).unwrap_or(0);
        let value = component.value().unwrap_or(0.0);

        let counter = counters.entry(prefix).or_insert(0);
        *counter += 1;
        lines.push(format!("{}{} {} {} {}", prefix, counter, n1, n2, value));
    }

    Netlist {
        lines,
        node_count: node_map.node_count(),
    }
}

fn spice_prefix(component_type: ComponentType) -> Option<char> {
    match component_type {
        ComponentType::Resistor => Some('R'),
        ComponentType::Capacitor => Some('C'),
        ComponentType::Inductor => Some('L'),
        ComponentType::VoltageSource => Some('V'),
        ComponentType::Ground => None,
    }
}
