//! Built-in 5x7 block font.
//!
//! Used when the TrueType font cannot be loaded. Covers digits, Latin letters
//! (lowercase is drawn with the capital glyphs), space, `-`, `_` and `.`,
//! which is enough for subject identifiers and year labels.

use image::{GrayImage, Luma};

/// Glyph width in cells.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in cells.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in cells (one blank column between glyphs).
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; bit 4 is the leftmost cell.
type Glyph = [u8; GLYPH_HEIGHT as usize];

#[rustfmt::skip]
const LETTERS: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const SPACE: Glyph = [0; 7];
const HYPHEN: Glyph = [0, 0, 0, 0b11111, 0, 0, 0];
const UNDERSCORE: Glyph = [0, 0, 0, 0, 0, 0, 0b11111];
const PERIOD: Glyph = [0, 0, 0, 0, 0, 0b01100, 0b01100];

/// Looks up the glyph for `c`.
pub fn glyph(c: char) -> Option<Glyph> {
    match c {
        'A'..='Z' => Some(LETTERS[(c as u8 - b'A') as usize]),
        'a'..='z' => Some(LETTERS[(c as u8 - b'a') as usize]),
        '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
        ' ' => Some(SPACE),
        '-' => Some(HYPHEN),
        '_' => Some(UNDERSCORE),
        '.' => Some(PERIOD),
        _ => None,
    }
}

/// Edge length in pixels of one glyph cell at `font_size`.
pub fn cell_pixels(font_size: f32) -> u32 {
    (font_size / 8.0).round().max(1.0) as u32
}

/// Draws `text` starting at pixel column `left`, vertically centered.
///
/// Pixels falling outside the canvas are clipped.
///
/// # Errors
///
/// Returns the first character without a glyph; nothing is drawn then.
pub fn draw(canvas: &mut GrayImage, text: &str, left: u32, font_size: f32) -> Result<(), char> {
    let glyphs = text
        .chars()
        .map(|c| glyph(c).ok_or(c))
        .collect::<Result<Vec<_>, _>>()?;

    let cell = cell_pixels(font_size);
    let top = canvas.height().saturating_sub(GLYPH_HEIGHT * cell) / 2;

    for (index, rows) in glyphs.iter().enumerate() {
        let glyph_left = left + index as u32 * GLYPH_ADVANCE * cell;
        for (row, bits) in (0u32..).zip(rows) {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b10000 >> col) == 0 {
                    continue;
                }
                fill_cell(canvas, glyph_left + col * cell, top + row * cell, cell);
            }
        }
    }
    Ok(())
}

fn fill_cell(canvas: &mut GrayImage, x0: u32, y0: u32, cell: u32) {
    for y in y0..(y0 + cell).min(canvas.height()) {
        for x in x0..(x0 + cell).min(canvas.width()) {
            canvas.put_pixel(x, y, Luma([u8::MAX]));
        }
    }
}
