//! 5x7 bitmap font for writing text straight into the RGBA frame buffer.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub type Rgba = [u8; 4];

/// Rows of a glyph, top to bottom; bit 4 is the leftmost column.
fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    Some(match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000; 7],
        _ => return None,
    })
}

/// Horizontal space taken by one character, gap included.
pub fn advance(scale: u32) -> u32 {
    6 * scale
}

/// Width in pixels of `text`, without the trailing gap.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    (chars * advance(scale)).saturating_sub(scale)
}

fn put_pixel(frame: &mut [u8], x: u32, y: u32, color: Rgba) {
    if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
        return;
    }
    let i = ((y * SCREEN_WIDTH + x) * 4) as usize;
    if i + 4 <= frame.len() {
        frame[i..i + 4].copy_from_slice(&color);
    }
}

/// Draws one character with its top-left corner at (x, y). Unknown
/// characters leave a blank. Returns the advance.
pub fn draw_char(frame: &mut [u8], ch: char, x: u32, y: u32, scale: u32, color: Rgba) -> u32 {
    if let Some(rows) = glyph_5x7(ch) {
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..5u32 {
                if (row >> (4 - rx)) & 1 == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        put_pixel(frame, x + rx * scale + sx, y + ry as u32 * scale + sy, color);
                    }
                }
            }
        }
    }
    advance(scale)
}

pub fn draw_text(frame: &mut [u8], text: &str, x: u32, y: u32, scale: u32, color: Rgba) {
    let mut cx = x;
    for ch in text.chars() {
        cx += draw_char(frame, ch, cx, y, scale, color);
    }
}

/// Same as [`draw_text`], centered horizontally on the screen.
pub fn draw_text_centered(frame: &mut [u8], text: &str, y: u32, scale: u32, color: Rgba) {
    let x = SCREEN_WIDTH.saturating_sub(text_width(text, scale)) / 2;
    draw_text(frame, text, x, y, scale, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgba = [1, 2, 3, 255];

    fn blank() -> Vec<u8> {
        vec![0; (SCREEN_WIDTH * SCREEN_HEIGHT * 4) as usize]
    }

    fn pixel(frame: &[u8], x: u32, y: u32) -> Rgba {
        let i = ((y * SCREEN_WIDTH + x) * 4) as usize;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    #[test]
    fn lowercase_uses_uppercase_glyphs() {
        assert_eq!(glyph_5x7('a'), glyph_5x7('A'));
        assert!(glyph_5x7('%').is_none());
    }

    #[test]
    fn draws_scaled_glyph_bits() {
        let mut frame = blank();
        // 'T' top row is fully set, second row only the middle column
        assert_eq!(draw_char(&mut frame, 'T', 10, 10, 2, INK), 12);
        assert_eq!(pixel(&frame, 10, 10), INK);
        assert_eq!(pixel(&frame, 19, 11), INK);
        assert_eq!(pixel(&frame, 10, 12), [0; 4]);
        assert_eq!(pixel(&frame, 14, 12), INK);
    }

    #[test]
    fn widths_and_centering() {
        assert_eq!(text_width("AB", 2), 22);
        assert_eq!(text_width("", 2), 0);

        let mut frame = blank();
        draw_text_centered(&mut frame, "I", 0, 1, INK);
        // 'I' top row spans five pixels around the middle of the screen
        let x = (SCREEN_WIDTH - 5) / 2;
        assert_eq!(pixel(&frame, x, 0), INK);
        assert_eq!(pixel(&frame, x + 4, 0), INK);
        assert_eq!(pixel(&frame, x - 1, 0), [0; 4]);
    }

    #[test]
    fn text_off_screen_is_clipped() {
        let mut frame = blank();
        draw_text(&mut frame, "WWWW", SCREEN_WIDTH - 3, SCREEN_HEIGHT - 3, 2, INK);
        assert_eq!(pixel(&frame, SCREEN_WIDTH - 3, SCREEN_HEIGHT - 3), INK);
    }
}
