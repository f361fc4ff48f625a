//! Koordinaten-Konvertierung zwischen Welt- und Pixel-Raum.
//!
//! 7DTD-Weltkoordinaten haben ihren Ursprung in der Kartenmitte
//! (X positiv = Ost, Y positiv = Nord), Pixelkoordinaten oben links.

use anyhow::{Context, Result};

/// In-Welt-Position einer Decoration (Ursprung = Kartenmitte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldPos {
    /// Ost-West-Achse (Ost positiv)
    pub x: i32,
    /// Nord-Süd-Achse (Nord positiv)
    pub y: i32,
}

impl WorldPos {
    /// Parst einen Positions-String aus prefabs.xml.
    ///
    /// Format: `"x,y"` oder `"x,höhe,y"`. X steht vor dem ersten,
    /// Y hinter dem letzten Komma; ein mittleres Höhenfeld wird ignoriert.
    pub fn parse(text: &str) -> Result<Self> {
        let first = text
            .find(',')
            .with_context(|| format!("Kein Komma im Positions-String: '{}'", text))?;
        // find() hat bereits getroffen, rfind() kann nicht leer ausgehen
        let last = text.rfind(',').unwrap();
        let x = text[..first]
            .trim()
            .parse::<i32>()
            .with_context(|| format!("Ungültige X-Koordinate in '{}'", text))?;
        let y = text[last + 1..]
            .trim()
            .parse::<i32>()
            .with_context(|| format!("Ungültige Y-Koordinate in '{}'", text))?;
        Ok(Self { x, y })
    }

    /// Formatiert die Position als Kompass-Koordinate, z.B. `"50N 100E"`.
    ///
    /// Null zählt zur Süd- bzw. West-Seite.
    pub fn compass(&self) -> String {
        let ew = if self.x > 0 {
            format!("{}E", self.x)
        } else {
            format!("{}W", self.x.abs())
        };
        let ns = if self.y > 0 {
            format!("{}N", self.y)
        } else {
            format!("{}S", self.y.abs())
        };
        format!("{} {}", ns, ew)
    }
}

/// Pixelposition auf dem Karten-Canvas (Ursprung oben links).
pub type CanvasPos = (u32, u32);

/// Rechnet eine Weltposition in Pixelkoordinaten um.
///
/// `col = map_size/2 + x`, `row = map_size/2 - y`. Karten sind
/// hochauflösend genug, dass Rundungsfehler keine Rolle spielen.
/// Positionen außerhalb des Canvas werden auf den Rand geklemmt.
pub fn to_canvas(map_size: u32, world: WorldPos) -> CanvasPos {
    let half = (map_size / 2) as i64;
    let max = map_size.saturating_sub(1) as i64;
    let col = (half + world.x as i64).clamp(0, max);
    let row = (half - world.y as i64).clamp(0, max);
    (col as u32, row as u32)
}
