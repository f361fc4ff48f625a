//! Legenden-Erzeugung: Marker-Nummer → POI-Name, Anzahl, Koordinate.

use crate::markers::Marker;
use crate::poi::PoiGroups;

/// Kopfzeile der Legende.
pub const LEGEND_HEADER: &str = "Marker\tPOI Name (count)";

/// Baut die Legendenzeilen in Marker-Reihenfolge.
///
/// Format pro Zeile: `"<Index>\t<Anzeigename> (<Anzahl>)"`. Für
/// Einzel-Vorkommen wird zusätzlich die ursprüngliche Weltkoordinate
/// als Kompass-Suffix angehängt, z.B. `"3\tWasserwerk (1) 50N 100E"`.
/// Der Aufrufer verbindet die Zeilen mit Newlines.
pub fn build_legend(markers: &[Marker], groups: &PoiGroups) -> Vec<String> {
    let mut lines = Vec::with_capacity(markers.len() + 1);
    lines.push(LEGEND_HEADER.to_string());

    for marker in markers {
        let instances = groups.instances(&marker.internal);
        let mut line = format!("{}\t{} ({})", marker.index, marker.display, instances.len());
        if let [single] = instances {
            line.push(' ');
            line.push_str(&single.world.compass());
        }
        lines.push(line);
    }

    lines
}
