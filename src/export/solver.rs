//! Übergabe des Payloads an den externen Solver.

use super::payload::{payload_to_json, SolverPayload};

/// Externer Solver, der einen Payload entgegennimmt.
///
/// Erfolg bedeutet nur, dass der Request ohne Transportfehler abgeschlossen wurde.
/// Die Antwort wird nicht ausgewertet.
pub trait SolverClient {
    /// Sendet den Payload synchron an den Solver.
    fn submit(&self, payload: &SolverPayload) -> anyhow::Result<()>;

    /// Übernimmt einen geänderten Endpunkt aus den Optionen.
    fn set_endpoint(&mut self, _url: &str) {}
}

/// Solver-Anbindung über HTTP-POST mit JSON-Body.
#[derive(Debug, Clone)]
pub struct HttpSolverClient {
    url: String,
}

impl HttpSolverClient {
    /// Erstellt einen Client für den gegebenen Endpunkt.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Ziel-URL des Clients.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SolverClient for HttpSolverClient {
    fn set_endpoint(&mut self, url: &str) {
        if self.url != url {
            log::info!("Solver-Endpunkt: {}", url);
            self.url = url.to_string();
        }
    }

    fn submit(&self, payload: &SolverPayload) -> anyhow::Result<()> {
        let body = payload_to_json(payload)?;

        match ureq::post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(response) => {
                log::info!(
                    "Solver-Request an {} abgeschlossen (Status {})",
                    self.url,
                    response.status()
                );
                Ok(())
            }
            // HTTP-Statusfehler zählen nicht als Transportfehler
            Err(ureq::Error::Status(code, _)) => {
                log::warn!("Solver {} antwortete mit Status {}", self.url, code);
                Ok(())
            }
            Err(ureq::Error::Transport(transport)) => Err(anyhow::anyhow!(
                "Solver {} nicht erreichbar: {}",
                self.url,
                transport
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CircuitDocument;
    use crate::export::build_payload;

    #[test]
    fn test_invalid_endpoint_is_reported_as_error() {
        // Scheitert bereits beim URL-Parsen, ohne Netzwerkzugriff
        let client = HttpSolverClient::new("kein gültiger Endpunkt");
        let payload = build_payload(&CircuitDocument::new(), None);

        assert!(client.submit(&payload).is_err());
    }

    #[test]
    fn test_endpoint_can_be_replaced() {
        let mut client = HttpSolverClient::new(crate::shared::SOLVER_URL);

        client.set_endpoint("http://localhost:8080/run");

        assert_eq!(client.url(), "http://localhost:8080/run");
    }
}
