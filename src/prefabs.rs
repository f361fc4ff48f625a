//! Parsen der `prefabs.xml` einer 7DTD-Welt.
//!
//! Relevant sind ausschließlich die `<decoration name="..."
//! position="..."/>`-Elemente; alle übrigen Attribute (Rotation,
//! Y-Offset) werden ignoriert.

use anyhow::{bail, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::coords::WorldPos;

/// Eine Decoration-Platzierung aus prefabs.xml.
#[derive(Debug, Clone)]
pub struct Decoration {
    /// Interner Prefab-Name
    pub name: String,
    /// Position in Weltkoordinaten
    pub position: WorldPos,
}

/// Liest alle Decoration-Einträge in Dokument-Reihenfolge.
///
/// # Fehler
/// Fehlerhaftes XML oder eine nicht parsbare Position brechen den
/// gesamten Ordner ab.
pub fn parse_decorations(xml: &str) -> Result<Vec<Decoration>> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut decorations = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                if e.name().as_ref() == b"decoration" {
                    let mut name = None;
                    let mut position = None;

                    for attr in e.attributes().flatten() {
                        let val = String::from_utf8_lossy(&attr.value).to_string();
                        match attr.key.as_ref() {
                            b"name" => name = Some(val),
                            b"position" => position = Some(val),
                            _ => {}
                        }
                    }

                    match (name, position) {
                        (Some(name), Some(pos)) => {
                            let position = WorldPos::parse(&pos)?;
                            decorations.push(Decoration { name, position });
                        }
                        (name, _) => {
                            log::warn!(
                                "Decoration ohne name/position übersprungen (name={:?})",
                                name
                            );
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("Fehler beim Parsen von prefabs.xml: {}", e),
            _ => {}
        }
        buf.clear();
    }

    Ok(decorations)
}
