//! Laden, Compositing und Beschriften der Karten-Layer.
//!
//! Der Splat-Layer (Straßen) wird per Alpha-Compositing über den
//! Biome-Layer gelegt; auf das Ergebnis kommen die Marker-Nummern.

use anyhow::{ensure, Context, Result};
use image::{imageops, Rgba, RgbaImage};
use std::path::Path;

use crate::markers::Marker;
use crate::poi::PoiGroups;
use crate::text;

/// Lädt einen Raster-Layer als RGBA.
pub fn load_layer(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("Layer nicht lesbar: {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Alpha-Compositing des Splat-Layers über den Biome-Layer.
///
/// Beide Layer müssen identische, quadratische Abmessungen haben.
pub fn composite_layers(biomes: &RgbaImage, splat: &RgbaImage) -> Result<RgbaImage> {
    ensure!(
        biomes.dimensions() == splat.dimensions(),
        "Größen-Konflikt zwischen Biomes und Splat: biomes {}x{}, splat {}x{}",
        biomes.width(),
        biomes.height(),
        splat.width(),
        splat.height()
    );
    ensure!(
        biomes.width() == biomes.height(),
        "Karte ist nicht quadratisch: {}x{}",
        biomes.width(),
        biomes.height()
    );

    let mut out = biomes.clone();
    imageops::overlay(&mut out, splat, 0, 0);
    Ok(out)
}

/// Zeichnet alle Marker-Nummern auf das Bild.
///
/// Iteriert in Marker-Reihenfolge; jedes Vorkommen einer Gruppe erhält
/// dieselbe Nummer, zentriert über seiner Pixelposition.
pub fn draw_markers(
    image: &mut RgbaImage,
    markers: &[Marker],
    groups: &PoiGroups,
    color: Rgba<u8>,
    scale: u32,
) {
    for marker in markers {
        let label = marker.index.to_string();
        for instance in groups.instances(&marker.internal) {
            text::draw_label_centered(image, instance.canvas, &label, color, scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::WorldPos;
    use crate::lookup::NameTable;
    use crate::markers::assign_markers;
    use crate::prefabs::Decoration;

    #[test]
    fn test_composite_rejects_size_mismatch() {
        let biomes = RgbaImage::new(32, 32);
        let splat = RgbaImage::new(16, 16);
        let err = composite_layers(&biomes, &splat).unwrap_err();
        assert!(err.to_string().contains("Größen-Konflikt"), "{}", err);
    }

    #[test]
    fn test_composite_rejects_non_square() {
        let biomes = RgbaImage::new(32, 16);
        let splat = RgbaImage::new(32, 16);
        assert!(composite_layers(&biomes, &splat).is_err());
    }

    #[test]
    fn test_composite_blends_opaque_splat_pixels() {
        let biomes = RgbaImage::from_pixel(8, 8, Rgba([0, 120, 0, 255]));
        let mut splat = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        splat.put_pixel(3, 3, Rgba([200, 200, 200, 255]));

        let out = composite_layers(&biomes, &splat).unwrap();
        assert_eq!(*out.get_pixel(3, 3), Rgba([200, 200, 200, 255]));
        // Transparente Splat-Pixel lassen den Biome-Layer durch
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 120, 0, 255]));
    }

    #[test]
    fn test_draw_markers_writes_label_pixels() {
        let mut image = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
        let records = vec![Decoration {
            name: "cabinA".to_string(),
            position: WorldPos { x: 0, y: 0 },
        }];
        let groups = PoiGroups::aggregate(&records, 64);
        let table = NameTable::parse("cabinA,Cabin").unwrap();
        let markers = assign_markers(&groups, &table);

        let color = Rgba([0, 162, 232, 255]);
        draw_markers(&mut image, &markers, &groups, color, 1);
        // Marker "0" liegt zentriert über der Kartenmitte (32, 32)
        assert_eq!(*image.get_pixel(32, 32), color);
    }
}
