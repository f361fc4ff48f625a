//! Namens-Auflösung: interne Prefab-Namen ↔ Anzeigenamen.
//!
//! Die Lookup-Tabelle (`prefab_lookup.csv`) ist eine kopfzeilenlose
//! Zwei-Spalten-Tabelle `internerName,Anzeigename`, eine Zeile pro
//! Prefab-Typ. Sie wird einmal pro Lauf geladen und von allen
//! Welt-Ordnern geteilt.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Bijektive Namenstabelle mit Vorwärts- und Rückwärts-Lookup.
///
/// Beide Richtungen müssen eindeutig sein: doppelte interne Namen wie
/// auch doppelte Anzeigenamen schlagen beim Laden fehl, statt still
/// den späteren Eintrag gewinnen zu lassen.
#[derive(Debug, Default)]
pub struct NameTable {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl NameTable {
    /// Parst den Tabelleninhalt. Leere Zeilen werden übersprungen.
    pub fn parse(content: &str) -> Result<Self> {
        let mut table = Self::default();
        for (lineno, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some((internal, display)) = split_two_fields(line) else {
                bail!(
                    "Zeile {}: erwartet 'internerName,Anzeigename', gefunden '{}'",
                    lineno + 1,
                    line
                );
            };
            if table.forward.contains_key(internal) {
                bail!("Zeile {}: doppelter interner Name '{}'", lineno + 1, internal);
            }
            if table.reverse.contains_key(display) {
                bail!("Zeile {}: doppelter Anzeigename '{}'", lineno + 1, display);
            }
            table
                .forward
                .insert(internal.to_string(), display.to_string());
            table
                .reverse
                .insert(display.to_string(), internal.to_string());
        }
        Ok(table)
    }

    /// Lädt die Tabelle aus einer Datei.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Lookup-Tabelle nicht lesbar: {}", path.display()))?;
        let table = Self::parse(&content)
            .with_context(|| format!("Lookup-Tabelle fehlerhaft: {}", path.display()))?;
        log::info!(
            "{} Prefab-Namen geladen aus {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Anzeigename zu einem internen Namen.
    pub fn display_name(&self, internal: &str) -> Option<&str> {
        self.forward.get(internal).map(String::as_str)
    }

    /// Interner Name zu einem Anzeigenamen.
    pub fn internal_name(&self, display: &str) -> Option<&str> {
        self.reverse.get(display).map(String::as_str)
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Zerlegt eine Zeile an genau einem Komma.
fn split_two_fields(line: &str) -> Option<(&str, &str)> {
    let (internal, display) = line.split_once(',')?;
    if display.contains(',') {
        return None;
    }
    Some((internal, display))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_directions() {
        let table = NameTable::parse("cabinA,Cabin\nbunkerB,Bunker\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.display_name("cabinA"), Some("Cabin"));
        assert_eq!(table.internal_name("Bunker"), Some("bunkerB"));
        assert_eq!(table.display_name("silo"), None);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let table = NameTable::parse("\ncabinA,Cabin\n\n   \nbunkerB,Bunker\n\n").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_rejects_duplicate_internal_name() {
        let err = NameTable::parse("cabinA,Cabin\ncabinA,Hütte").unwrap_err();
        assert!(err.to_string().contains("cabinA"), "{}", err);
    }

    #[test]
    fn test_parse_rejects_duplicate_display_name() {
        let err = NameTable::parse("cabinA,Cabin\ncabinB,Cabin").unwrap_err();
        assert!(err.to_string().contains("Cabin"), "{}", err);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(NameTable::parse("nurEinFeld").is_err());
        assert!(NameTable::parse("a,b,c").is_err());
    }
}
