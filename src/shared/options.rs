//! Zentrale Konfiguration für den Schaltplan-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster & Treffer ────────────────────────────────────────────────

/// Rasterweite für Platzierungen in Canvas-Einheiten.
pub const GRID_SIZE: f32 = 20.0;
/// Radius für Anschluss-Treffer beim Verdrahten.
pub const TERMINAL_HIT_RADIUS: f32 = crate::core::TERMINAL_HIT_RADIUS;

// ── Solver ──────────────────────────────────────────────────────────

/// Lokaler Solver-Endpunkt (POST, JSON).
pub const SOLVER_URL: &str = "http://127.0.0.1:5000/simulate";

// ── Canvas-Rendering ───────────────────────────────────────────────

/// Farbe der Rasterpunkte (RGBA).
pub const GRID_COLOR: [f32; 4] = [0.35, 0.35, 0.35, 1.0];
/// Farbe der Bauteil-Symbole (RGBA: Weiß).
pub const COMPONENT_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
/// Farbe des selektierten Bauteils (RGBA: Magenta).
pub const SELECTION_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der Leitungen (RGBA: Grün).
pub const WIRE_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe der Gummiband-Vorschau (RGBA: Orange).
pub const RUBBER_BAND_COLOR: [f32; 4] = [1.0, 0.6, 0.1, 0.8];
/// Farbe der Anschlusspunkte (RGBA: Cyan).
pub const TERMINAL_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Linienstärke der Leitungen in Pixeln.
pub const WIRE_THICKNESS: f32 = 2.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `circuit_schematic_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Raster & Treffer ────────────────────────────────────────
    /// Rasterweite für Platzierungen
    pub grid_size: f32,
    /// Radius für Anschluss-Treffer
    pub terminal_hit_radius: f32,

    // ── Solver ──────────────────────────────────────────────────
    /// URL des Solver-Endpunkts
    pub solver_url: String,
    /// Analysefrequenz in Hz (None = Gleichstrom, Feld entfällt im Payload)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_frequency: Option<f64>,

    // ── Canvas ──────────────────────────────────────────────────
    /// Rasterpunkte anzeigen
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    /// Farbe der Rasterpunkte
    pub grid_color: [f32; 4],
    /// Farbe der Bauteil-Symbole
    pub component_color: [f32; 4],
    /// Farbe des selektierten Bauteils
    pub selection_color: [f32; 4],
    /// Farbe der Leitungen
    pub wire_color: [f32; 4],
    /// Farbe der Gummiband-Vorschau
    pub rubber_band_color: [f32; 4],
    /// Farbe der Anschlusspunkte
    pub terminal_color: [f32; 4],
    /// Linienstärke der Leitungen
    pub wire_thickness: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            terminal_hit_radius: TERMINAL_HIT_RADIUS,

            solver_url: SOLVER_URL.to_string(),
            analysis_frequency: None,

            show_grid: true,
            grid_color: GRID_COLOR,
            component_color: COMPONENT_COLOR,
            selection_color: SELECTION_COLOR,
            wire_color: WIRE_COLOR,
            rubber_band_color: RUBBER_BAND_COLOR,
            terminal_color: TERMINAL_COLOR,
            wire_thickness: WIRE_THICKNESS,
        }
    }
}

/// Serde-Default für `show_grid` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_grid() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Raster- und Trefferwerte durch die Standardwerte.
    ///
    /// Platzierungen müssen immer auf einem echten Raster landen, und ein
    /// Trefferradius ohne Fläche würde jeden Anschluss verfehlen.
    pub fn sanitized(mut self) -> Self {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            log::warn!(
                "Ungültige Rasterweite {}, verwende {}",
                self.grid_size,
                GRID_SIZE
            );
            self.grid_size = GRID_SIZE;
        }
        if !(self.terminal_hit_radius.is_finite() && self.terminal_hit_radius > 0.0) {
            log::warn!(
                "Ungültiger Trefferradius {}, verwende {}",
                self.terminal_hit_radius,
                TERMINAL_HIT_RADIUS
            );
            self.terminal_hit_radius = TERMINAL_HIT_RADIUS;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("circuit_schematic_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("circuit_schematic_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut options = EditorOptions::default();
        options.grid_size = 25.0;
        options.analysis_frequency = Some(50.0);

        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let parsed: EditorOptions = toml::from_str(&text).expect("Parsing");

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("circuit_schematic_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_save_then_load_restores_options() {
        let path = std::env::temp_dir().join(format!(
            "circuit_schematic_editor_options_{}.toml",
            std::process::id()
        ));
        let mut options = EditorOptions::default();
        options.solver_url = "http://localhost:8080/simulate".to_string();

        options.save_to_file(&path).expect("Speichern");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_zero_grid_size_from_file_falls_back_to_default() {
        let path = std::env::temp_dir().join(format!(
            "circuit_schematic_editor_zero_grid_{}.toml",
            std::process::id()
        ));
        let options = EditorOptions {
            grid_size: 0.0,
            terminal_hit_radius: -5.0,
            ..EditorOptions::default()
        };

        options.save_to_file(&path).expect("Speichern");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.grid_size, GRID_SIZE);
        assert_eq!(loaded.terminal_hit_radius, TERMINAL_HIT_RADIUS);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let options = EditorOptions {
            grid_size: 25.0,
            terminal_hit_radius: 8.0,
            ..EditorOptions::default()
        };

        let sanitized = options.clone().sanitized();

        assert_eq!(sanitized, options);
    }

    #[test]
    fn test_sanitized_replaces_non_finite_grid_size() {
        let options = EditorOptions {
            grid_size: f32::NAN,
            ..EditorOptions::default()
        }
        .sanitized();

        assert_eq!(options.grid_size, GRID_SIZE);
    }
}
