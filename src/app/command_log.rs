//! Bearbeitungsverlauf: die zuletzt ausgeführten Commands als Ringpuffer.
//!
//! Die Statuszeile zeigt daraus die jüngsten Schritte am Schaltplan an.

use std::collections::VecDeque;

use super::AppCommand;
use super::state::EditorTool;

/// Ringpuffer der ausgeführten Commands (neueste hinten).
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    const DEFAULT_CAPACITY: usize = 256;

    /// Erstellt einen leeren Verlauf mit Standardkapazität.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen leeren Verlauf, der höchstens `capacity` Einträge hält.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Hängt einen ausgeführten Command an; der älteste fällt bei voller Kapazität heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Die jüngsten `count` Commands, neueste zuerst.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().rev().take(count)
    }

    /// Kurzbeschreibungen der jüngsten Schritte, die den Schaltplan verändern.
    ///
    /// Zeiger-Bewegungen und Fenster-Commands tauchen nicht auf.
    pub fn recent_edits(&self, count: usize) -> Vec<String> {
        self.entries
            .iter()
            .rev()
            .filter_map(describe_edit)
            .take(count)
            .collect()
    }
}

/// Beschreibt einen Command, sofern er das Dokument oder das Werkzeug betrifft.
fn describe_edit(command: &AppCommand) -> Option<String> {
    match command {
        AppCommand::SetEditorTool { tool } => Some(format!("Werkzeug: {}", tool.label())),
        AppCommand::PlaceComponent { component_type, .. } => Some(format!(
            "{} platziert",
            EditorTool::Place(*component_type).label()
        )),
        AppCommand::WireToolPick { .. } => Some("Anschluss gewählt".to_string()),
        AppCommand::DeleteComponentAt { .. } => Some("Löschen".to_string()),
        AppCommand::SetSelectedValue { text } => Some(format!("Wert: {}", text)),
        AppCommand::ResetDocument => Some("Schaltplan geleert".to_string()),
        AppCommand::RunSimulation => Some("Simulation gestartet".to_string()),
        _ => None,
    }
}
