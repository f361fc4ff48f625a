//! `sdtd_map_markers` — beschriftete Übersichtskarten für 7-Days-to-Die-Welten.
//!
//! Liest pro Welt-Ordner die Biome- und Splat-Layer sowie die
//! `prefabs.xml`, setzt beide Layer per Alpha-Compositing zusammen und
//! zeichnet nummerierte Marker an allen bekannten POIs:
//! - Komposit ohne und mit Markern als PNG
//! - optional beschriftete Preview-Karte
//! - tab-separierte Legende (Nummer → Name, Anzahl, Koordinate)
//!
//! # Beispiel
//! ```no_run
//! use std::path::Path;
//! use sdtd_map_markers::{annotate_world, MapperOptions, NameTable};
//!
//! let table = NameTable::load_from_file(Path::new("prefab_lookup.csv"))?;
//! annotate_world(Path::new("Navezgane"), &table, &MapperOptions::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod composite;
pub mod coords;
pub mod legend;
pub mod lookup;
pub mod markers;
pub mod options;
pub mod poi;
pub mod prefabs;
pub mod text;

use anyhow::{Context, Result};
use image::Rgba;
use std::path::Path;

pub use lookup::NameTable;
pub use markers::Marker;
pub use options::MapperOptions;

/// Verarbeitet einen Welt-Ordner komplett: Layer laden, compositen,
/// Marker vergeben und zeichnen, Legende schreiben.
///
/// Fehlende Pflichtdateien, Größen-Konflikte und XML-Fehler brechen
/// nur diesen Ordner ab; eine unbrauchbare Preview kostet lediglich
/// die beschriftete Preview-Ausgabe.
pub fn annotate_world(folder: &Path, table: &NameTable, options: &MapperOptions) -> Result<()> {
    let world_name = world_name(folder);

    let biomes = composite::load_layer(&folder.join("biomes.png"))?;
    let splat = composite::load_layer(&folder.join("splat3.png"))?;
    let prefabs_path = folder.join("prefabs.xml");
    let xml = std::fs::read_to_string(&prefabs_path)
        .with_context(|| format!("prefabs.xml nicht lesbar: {}", prefabs_path.display()))?;

    let mut map = composite::composite_layers(&biomes, &splat)?;
    let map_size = map.width();
    log::debug!("map_size: {}", map_size);

    map.save(folder.join(format!("{} no markers.png", world_name)))
        .context("Komposit ohne Marker konnte nicht gespeichert werden")?;

    let decorations = prefabs::parse_decorations(&xml)?;
    log::debug!("{} Decorations in prefabs.xml", decorations.len());

    let groups = poi::PoiGroups::aggregate(&decorations, map_size);
    let assigned = markers::assign_markers(&groups, table);
    log::info!("{}: {} POI-Typen erhalten Marker", world_name, assigned.len());

    let color = Rgba(options.marker_color);
    composite::draw_markers(&mut map, &assigned, &groups, color, options.marker_scale);
    map.save(folder.join(format!("{} with markers.png", world_name)))
        .context("Komposit mit Markern konnte nicht gespeichert werden")?;

    if options.annotate_preview {
        annotate_preview(folder, &world_name, map_size, &assigned, &groups, color, options.marker_scale);
    }

    let legend_lines = legend::build_legend(&assigned, &groups);
    let legend_path = folder.join(format!("{} legend.txt", world_name));
    std::fs::write(&legend_path, legend_lines.join("\n"))
        .with_context(|| format!("Legende konnte nicht geschrieben werden: {}", legend_path.display()))?;

    Ok(())
}

/// Beschriftet die optionale Preview-Karte (`preview.png`).
///
/// Fehlt die Datei oder passt ihre Größe nicht zur Karte, wird nur
/// dieser Schritt übersprungen, kein Ordner-Abbruch.
fn annotate_preview(
    folder: &Path,
    world_name: &str,
    map_size: u32,
    markers: &[Marker],
    groups: &poi::PoiGroups,
    color: Rgba<u8>,
    scale: u32,
) {
    let path = folder.join("preview.png");
    if !path.exists() {
        return;
    }

    let mut preview = match composite::load_layer(&path) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("Preview nicht lesbar, überspringe Beschriftung: {:#}", e);
            return;
        }
    };

    if preview.dimensions() != (map_size, map_size) {
        log::warn!(
            "Preview-Größe {}x{} passt nicht zur Karte ({}x{}), überspringe Beschriftung",
            preview.width(),
            preview.height(),
            map_size,
            map_size
        );
        return;
    }

    composite::draw_markers(&mut preview, markers, groups, color, scale);
    let out_path = folder.join(format!("{} preview with markers.png", world_name));
    if let Err(e) = preview.save(&out_path) {
        log::warn!("Preview mit Markern konnte nicht gespeichert werden: {}", e);
    }
}

/// Ordnername für die Ausgabedateien (letzte Pfadkomponente).
fn world_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| folder.display().to_string())
}

/// Führt `f` aus und loggt die Laufzeit unter `label` (Debug-Level).
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = std::time::Instant::now();
    let result = f();
    log::debug!("{}: fertig in {:.2?}", label, start.elapsed());
    result
}
