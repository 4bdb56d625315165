//! Benutzerbenachrichtigung bei Fehlschlägen (Platzierung, Simulation).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Kanal für modale Fehlermeldungen an den Benutzer.
pub trait Notifier {
    /// Meldet einen Fehlschlag. Blockiert nicht.
    fn report_failure(&self, message: &str);
}

/// Schreibt Meldungen nur ins Log (Headless-Betrieb).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn report_failure(&self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Sammelt Meldungen, bis der Host sie als Dialog anzeigt.
///
/// Klone teilen sich denselben Puffer: der Controller schreibt,
/// die UI holt die Meldungen pro Frame ab.
#[derive(Debug, Clone, Default)]
pub struct NotificationInbox {
    messages: Arc<Mutex<VecDeque<String>>>,
}

impl NotificationInbox {
    /// Erstellt einen leeren Puffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entnimmt alle wartenden Meldungen in Eingangsreihenfolge.
    pub fn drain(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    /// Anzahl wartender Meldungen.
    pub fn len(&self) -> usize {
        match self.messages.lock() {
            Ok(queue) => queue.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Gibt `true` zurück, wenn keine Meldung wartet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationInbox {
    fn report_failure(&self, message: &str) {
        log::warn!("{}", message);
        match self.messages.lock() {
            Ok(mut queue) => queue.push_back(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push_back(message.to_string()),
        }
    }
}
