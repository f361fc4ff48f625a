//! Bitmap-Rendering der Marker-Nummern.
//!
//! Eingebetteter 5×7-Ziffern-Font, skaliert gezeichnet; keine
//! Font-Dateien auf der Platte nötig. Marker-Labels sind reine
//! Dezimalzahlen, mehr als die zehn Ziffern braucht es nicht.

use image::{Rgba, RgbaImage};

const DIGIT_WIDTH: usize = 5;
const DIGIT_HEIGHT: usize = 7;

/// Pixelbreite eines Labels bei gegebener Skalierung.
pub fn label_width(label: &str, scale: u32) -> u32 {
    let chars = label.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * DIGIT_WIDTH as u32 * scale + (chars - 1) * scale
}

/// Pixelhöhe eines Labels.
pub fn label_height(scale: u32) -> u32 {
    DIGIT_HEIGHT as u32 * scale
}

/// Zeichnet ein Ziffern-Label zentriert über der Pixelposition.
///
/// Die linke obere Ecke ergibt sich aus der Position minus halber
/// Glyphenbox pro Achse (Ganzzahl-Division).
pub fn draw_label_centered(
    image: &mut RgbaImage,
    pos: (u32, u32),
    label: &str,
    color: Rgba<u8>,
    scale: u32,
) {
    let x = pos.0 as i32 - (label_width(label, scale) / 2) as i32;
    let y = pos.1 as i32 - (label_height(scale) / 2) as i32;
    draw_label(image, x, y, label, color, scale);
}

/// Zeichnet ein Ziffern-Label ab der linken oberen Ecke.
///
/// Zeichen außer 0–9 werden als Leerraum übersprungen, Pixel
/// außerhalb des Bildes verworfen.
pub fn draw_label(image: &mut RgbaImage, x: i32, y: i32, label: &str, color: Rgba<u8>, scale: u32) {
    let advance = (DIGIT_WIDTH as i32 + 1) * scale as i32; // 1px Spacing pro Scale
    let mut cursor_x = x;

    for ch in label.chars() {
        if let Some(digit) = ch.to_digit(10) {
            draw_glyph(image, cursor_x, y, &DIGITS_5X7[digit as usize], color, scale);
        }
        cursor_x += advance;
    }
}

/// Zeichnet ein einzelnes Ziffern-Glyph.
fn draw_glyph(
    image: &mut RgbaImage,
    x: i32,
    y: i32,
    glyph: &[u8; DIGIT_HEIGHT],
    color: Rgba<u8>,
    scale: u32,
) {
    let img_w = image.width() as i32;
    let img_h = image.height() as i32;

    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..DIGIT_WIDTH {
            if bits & (1 << (DIGIT_WIDTH - 1 - col)) != 0 {
                // Skalierter Pixel-Block
                for sy in 0..scale as i32 {
                    for sx in 0..scale as i32 {
                        let px = x + col as i32 * scale as i32 + sx;
                        let py = y + row as i32 * scale as i32 + sy;
                        if px >= 0 && px < img_w && py >= 0 && py < img_h {
                            image.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}

/// 5×7-Glyphen für die Ziffern 0–9. Bits 4–0 sind die fünf Spalten.
#[rustfmt::skip]
static DIGITS_5X7: [[u8; DIGIT_HEIGHT]; 10] = [
    // '0'
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // '1'
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // '2'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
    // '3'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
    // '4'
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // '5'
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // '6'
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // '7'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // '8'
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // '9'
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_width() {
        assert_eq!(label_width("12", 1), 11); // 5+1+5
        assert_eq!(label_width("7", 1), 5);
        assert_eq!(label_width("", 1), 0);
        assert_eq!(label_width("12", 2), 22); // (5*2)+2+(5*2)
    }

    #[test]
    fn test_draw_label_no_panic() {
        let mut img = RgbaImage::new(50, 20);
        draw_label(&mut img, 0, 0, "42", Rgba([255, 255, 255, 255]), 1);
    }

    #[test]
    fn test_draw_out_of_bounds() {
        // Soll nicht paniken bei negativen Koordinaten
        let mut img = RgbaImage::new(10, 10);
        draw_label(&mut img, -5, -5, "8", Rgba([255, 0, 0, 255]), 1);
    }

    #[test]
    fn test_centered_label_hits_center_pixel() {
        // Die Glyphe '0' hat in der Mittelzeile ein gesetztes Mittel-Bit
        let mut img = RgbaImage::new(21, 21);
        let color = Rgba([1, 2, 3, 255]);
        draw_label_centered(&mut img, (10, 10), "0", color, 1);
        assert_eq!(*img.get_pixel(10, 10), color);
    }
}
