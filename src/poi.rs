//! Gruppierung der Decorations zu POI-Gruppen.
//!
//! Jede Gruppe sammelt alle Vorkommen eines internen Prefab-Namens in
//! Dokument-Reihenfolge. Gefiltert wird hier noch nicht; unbekannte
//! Namen fallen erst bei der Marker-Vergabe heraus.

use indexmap::IndexMap;

use crate::coords::{self, CanvasPos, WorldPos};
use crate::prefabs::Decoration;

/// Ein einzelnes POI-Vorkommen mit Welt- und Pixelposition.
///
/// Die Weltposition bleibt erhalten, weil die Legende für
/// Einzel-Vorkommen die ursprüngliche Koordinate ausgibt.
#[derive(Debug, Clone, Copy)]
pub struct PoiInstance {
    /// Ursprüngliche Weltkoordinate
    pub world: WorldPos,
    /// Abgeleitete Pixelkoordinate
    pub canvas: CanvasPos,
}

/// POI-Vorkommen gruppiert nach internem Namen.
#[derive(Debug, Default)]
pub struct PoiGroups {
    groups: IndexMap<String, Vec<PoiInstance>>,
}

impl PoiGroups {
    /// Gruppiert Decorations und rechnet ihre Positionen in Pixel um.
    ///
    /// Die Gruppen folgen der Dokument-Reihenfolge des jeweils ersten
    /// Auftretens, die Vorkommen innerhalb einer Gruppe der
    /// Dokument-Reihenfolge insgesamt.
    pub fn aggregate(records: &[Decoration], map_size: u32) -> Self {
        let mut groups: IndexMap<String, Vec<PoiInstance>> = IndexMap::new();
        for record in records {
            let instance = PoiInstance {
                world: record.position,
                canvas: coords::to_canvas(map_size, record.position),
            };
            groups.entry(record.name.clone()).or_default().push(instance);
        }
        Self { groups }
    }

    /// Vorkommen eines internen Namens (leer falls unbekannt).
    pub fn instances(&self, internal: &str) -> &[PoiInstance] {
        self.groups.get(internal).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Anzahl Vorkommen eines internen Namens.
    pub fn count(&self, internal: &str) -> usize {
        self.instances(internal).len()
    }

    /// Alle internen Namen in Gruppen-Reihenfolge.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoration(name: &str, x: i32, y: i32) -> Decoration {
        Decoration {
            name: name.to_string(),
            position: WorldPos { x, y },
        }
    }

    #[test]
    fn test_aggregate_groups_by_name() {
        let records = vec![
            decoration("poiA", 1, 1),
            decoration("poiB", 5, 5),
            decoration("poiA", 2, 2),
            decoration("poiA", 3, 3),
        ];
        let groups = PoiGroups::aggregate(&records, 100);

        assert_eq!(groups.count("poiA"), 3);
        assert_eq!(groups.count("poiB"), 1);
        assert_eq!(groups.count("poiC"), 0);

        // Vorkommen bleiben in Dokument-Reihenfolge
        let a = groups.instances("poiA");
        assert_eq!(a[0].world, WorldPos { x: 1, y: 1 });
        assert_eq!(a[1].world, WorldPos { x: 2, y: 2 });
        assert_eq!(a[2].world, WorldPos { x: 3, y: 3 });
    }

    #[test]
    fn test_aggregate_converts_positions() {
        let groups = PoiGroups::aggregate(&[decoration("poiA", 10, -5)], 100);
        assert_eq!(groups.instances("poiA")[0].canvas, (60, 55));
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let records = vec![
            decoration("zuletzt_sortiert", 0, 0),
            decoration("anfang", 0, 0),
            decoration("zuletzt_sortiert", 1, 1),
        ];
        let groups = PoiGroups::aggregate(&records, 100);
        let names: Vec<&str> = groups.names().collect();
        assert_eq!(names, vec!["zuletzt_sortiert", "anfang"]);
    }
}
