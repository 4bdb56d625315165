use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Freigabe des Run-Buttons.
///
/// Während eine Simulation läuft, ist die Freigabe entzogen. Die Freigabe
/// wird über einen `RunGuard` gehalten und beim Drop wiederhergestellt,
/// auch wenn der Solver-Aufruf fehlschlägt.
#[derive(Debug, Clone)]
pub struct RunControl {
    enabled: Arc<AtomicBool>,
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}

impl RunControl {
    /// Erstellt eine freigegebene Run-Steuerung.
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Gibt zurück, ob eine Simulation gestartet werden darf.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Geteilter Zustand für Beobachter außerhalb des AppState (z.B. Tests).
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.enabled)
    }

    /// Entzieht die Freigabe. `None`, wenn bereits eine Simulation läuft.
    pub fn acquire(&self) -> Option<RunGuard> {
        self.enabled
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| RunGuard {
                enabled: Arc::clone(&self.enabled),
            })
    }
}

/// Hält die entzogene Run-Freigabe bis zum Drop.
#[must_use]
#[derive(Debug)]
pub struct RunGuard {
    enabled: Arc<AtomicBool>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.enabled.store(true, Ordering::SeqCst);
    }
}

/// Ergebnis des letzten Solver-Aufrufs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// Request ohne Transportfehler abgeschlossen
    Completed,
    /// Transportfehler mit Meldung
    Failed(String),
}

/// Simulationsbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    /// Freigabe des Run-Buttons
    pub run_control: RunControl,
    /// Ergebnis des letzten Laufs
    pub last_outcome: Option<SimulationOutcome>,
}

impl SimulationState {
    /// Erstellt einen Simulationszustand ohne bisherigen Lauf.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_disables_until_dropped() {
        let control = RunControl::new();
        assert!(control.is_enabled());

        let guard = control.acquire().expect("Freigabe sollte verfügbar sein");
        assert!(!control.is_enabled());
        assert!(control.acquire().is_none());

        drop(guard);
        assert!(control.is_enabled());
    }

    #[test]
    fn test_flag_is_shared_with_clones() {
        let control = RunControl::new();
        let flag = control.flag();

        let _guard = control.acquire().expect("Freigabe sollte verfügbar sein");

        assert!(!flag.load(Ordering::SeqCst));
        assert!(!control.clone().is_enabled());
    }
}
