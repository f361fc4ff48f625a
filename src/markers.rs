//! Marker-Vergabe: deterministisch nummerierte POI-Marker.

use crate::lookup::NameTable;
use crate::poi::PoiGroups;

/// Ein vergebener Marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Nullbasierter, lückenloser Marker-Index
    pub index: usize,
    /// Interner Prefab-Name
    pub internal: String,
    /// Anzeigename aus der Namenstabelle
    pub display: String,
}

/// Vergibt Marker für alle POIs, die sowohl in den Gruppen als auch in
/// der Namenstabelle vorkommen.
///
/// Sortiert wird nach Anzeigename in Code-Point-Reihenfolge; der Index
/// entspricht dem Rang. Legende und Zeichenroutine iterieren in genau
/// dieser Reihenfolge, damit die Nummern auf Karte und Legende
/// übereinstimmen. Gleichstände kann es nicht geben, da die Tabelle
/// eine geprüfte Bijektion ist.
pub fn assign_markers(groups: &PoiGroups, table: &NameTable) -> Vec<Marker> {
    let mut entries: Vec<(String, String)> = groups
        .names()
        .filter_map(|internal| {
            table
                .display_name(internal)
                .map(|display| (display.to_string(), internal.to_string()))
        })
        .collect();
    // Anzeigename steht vorn im Tupel, sortiert wird also nach ihm
    entries.sort();

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (display, internal))| Marker {
            index,
            internal,
            display,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::WorldPos;
    use crate::prefabs::Decoration;

    fn decoration(name: &str) -> Decoration {
        Decoration {
            name: name.to_string(),
            position: WorldPos { x: 0, y: 0 },
        }
    }

    #[test]
    fn test_assign_sorts_by_display_name() {
        let groups = PoiGroups::aggregate(&[decoration("cabin"), decoration("bunker")], 100);
        // "silo" hat keine Vorkommen und darf nicht auftauchen
        let table = NameTable::parse("cabin,Cabin\nbunker,Bunker\nsilo,Silo").unwrap();

        let markers = assign_markers(&groups, &table);
        assert_eq!(
            markers,
            vec![
                Marker {
                    index: 0,
                    internal: "bunker".to_string(),
                    display: "Bunker".to_string(),
                },
                Marker {
                    index: 1,
                    internal: "cabin".to_string(),
                    display: "Cabin".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_assign_drops_unknown_names() {
        let groups = PoiGroups::aggregate(&[decoration("unbekannt"), decoration("cabin")], 100);
        let table = NameTable::parse("cabin,Cabin").unwrap();

        let markers = assign_markers(&groups, &table);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].internal, "cabin");
    }

    #[test]
    fn test_assign_empty_groups() {
        let groups = PoiGroups::default();
        let table = NameTable::parse("cabin,Cabin").unwrap();
        assert!(assign_markers(&groups, &table).is_empty());
    }
}
