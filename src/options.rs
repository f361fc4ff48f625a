//! Laufzeit-Optionen des Mappers.
//!
//! `MapperOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Standard-Füllfarbe der Marker-Nummern (RGBA).
pub const MARKER_COLOR: [u8; 4] = [0, 162, 232, 255];
/// Standard-Skalierung des Ziffern-Fonts (Glyphenhöhe = 7 px × Scale).
pub const MARKER_SCALE: u32 = 6;

/// Alle zur Laufzeit änderbaren Mapper-Optionen.
/// Wird als `sdtd_map_markers.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapperOptions {
    /// Füllfarbe der Marker-Nummern (RGBA)
    pub marker_color: [u8; 4],
    /// Skalierungsfaktor des Ziffern-Fonts
    pub marker_scale: u32,
    /// Preview-Karte ebenfalls beschriften, falls vorhanden
    #[serde(default = "default_annotate_preview")]
    pub annotate_preview: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            marker_color: MARKER_COLOR,
            marker_scale: MARKER_SCALE,
            annotate_preview: true,
        }
    }
}

/// Serde-Default für `annotate_preview` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_annotate_preview() -> bool {
    true
}

impl MapperOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
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

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("sdtd-mapper"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("sdtd_map_markers.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = MapperOptions::default();
        assert_eq!(opts.marker_color, MARKER_COLOR);
        assert_eq!(opts.marker_scale, MARKER_SCALE);
        assert!(opts.annotate_preview);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let opts = MapperOptions::load_from_file(Path::new("gibt_es_nicht.toml"));
        assert_eq!(opts.marker_color, MARKER_COLOR);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = MapperOptions::default();
        opts.marker_scale = 3;
        let toml_text = toml::to_string_pretty(&opts).unwrap();
        let back: MapperOptions = toml::from_str(&toml_text).unwrap();
        assert_eq!(back.marker_scale, 3);
    }
}
