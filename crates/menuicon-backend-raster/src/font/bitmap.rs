//! Bundled 5x7 bitmap font used when no emoji font can be loaded.
//!
//! Covers printable ASCII from space through `_`; lowercase letters reuse the
//! uppercase patterns. Anything else, emoji included, is drawn as an outlined
//! placeholder box and reported as missing by [`GlyphFont::has_glyph`].

use menuicon_spec::MAX_FONT_SIZE;

use super::{GlyphFont, PlacedGlyph, TextLayout};
use crate::layout::is_zero_width;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in unscaled pixels (glyph plus 1px spacing).
const GLYPH_ADVANCE: u32 = 6;

/// Drawn for characters the font does not cover.
const PLACEHOLDER: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// Scaled 5x7 bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Pick the integer scale closest to `font_size` without exceeding it
    /// (one unscaled cell is roughly 8px tall with spacing). Sizes above
    /// [`MAX_FONT_SIZE`] are treated as the maximum.
    pub fn new(font_size: u32) -> Self {
        Self {
            scale: (font_size.min(MAX_FONT_SIZE) / 8).max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn rasterize(&self, rows: &[u8; 7]) -> (u32, u32, Vec<u8>) {
        let scale = self.scale as usize;
        let width = GLYPH_WIDTH as usize * scale;
        let height = GLYPH_HEIGHT as usize * scale;
        let mut coverage = vec![0u8; width * height];

        for py in 0..height {
            let row = rows[py / scale];
            for px in 0..width {
                let col = (px / scale) as u32;
                if (row >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    coverage[py * width + px] = 255;
                }
            }
        }

        (width as u32, height as u32, coverage)
    }
}

fn pattern_for(ch: char) -> Option<&'static [u8; 7]> {
    let ch = ch.to_ascii_uppercase();
    match ch {
        ' '..='_' => Some(&FONT_5X7[(ch as u32 - 32) as usize]),
        _ => None,
    }
}

impl GlyphFont for BitmapFont {
    fn name(&self) -> String {
        format!("bundled bitmap 5x7 (scale {})", self.scale)
    }

    fn has_glyph(&self, ch: char) -> bool {
        pattern_for(ch).is_some()
    }

    fn layout(&self, text: &str) -> TextLayout {
        let mut glyphs = Vec::new();
        let mut pen_x = 0i32;

        for ch in text.chars().filter(|&c| !is_zero_width(c)) {
            let rows = pattern_for(ch).unwrap_or(&PLACEHOLDER);
            let (width, height, coverage) = self.rasterize(rows);
            glyphs.push(PlacedGlyph {
                ch,
                x: pen_x,
                y: 0,
                width,
                height,
                coverage,
            });
            pen_x += (GLYPH_ADVANCE * self.scale) as i32;
        }

        TextLayout { glyphs }
    }
}

// One byte per row, top to bottom; bit 4 is the leftmost column.

/// 5x7 patterns from space (32) through underscore (95).
const FONT_5X7: [[u8; 7]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // '!'
    [0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x00, 0x00], // '#'
    [0x04, 0x0E, 0x14, 0x0E, 0x05, 0x0E, 0x04], // '$'
    [0x19, 0x1A, 0x04, 0x0B, 0x13, 0x00, 0x00], // '%'
    [0x0C, 0x12, 0x0C, 0x12, 0x13, 0x0D, 0x00], // '&'
    [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // "'"
    [0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // '('
    [0x04, 0x02, 0x02, 0x02, 0x02, 0x04, 0x00], // ')'
    [0x00, 0x15, 0x0E, 0x15, 0x00, 0x00, 0x00], // '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x08], // ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00], // '.'
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // '9'
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00], // ':'
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x04, 0x08], // ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // '?'
    [0x0E, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0E], // '@'
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // 'C'
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // 'L'
    [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11], // 'M'
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // 'R'
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // 'X'
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // '['
    [0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // '_'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_from_font_size() {
        assert_eq!(BitmapFont::new(40).scale(), 5);
        assert_eq!(BitmapFont::new(7).scale(), 1);
        assert_eq!(BitmapFont::new(0).scale(), 1);
        assert_eq!(BitmapFont::new(16).scale(), 2);
    }

    #[test]
    fn test_huge_font_size_is_capped() {
        let font = BitmapFont::new(200_000);
        assert_eq!(font.scale(), MAX_FONT_SIZE / 8);

        let glyph = &font.layout("A").glyphs[0];
        assert_eq!(glyph.width, 5 * font.scale());
        assert_eq!(
            glyph.coverage.len(),
            (glyph.width * glyph.height) as usize
        );
    }

    #[test]
    fn test_coverage_of_ascii() {
        let font = BitmapFont::new(8);
        assert!(font.has_glyph('A'));
        assert!(font.has_glyph('a'));
        assert!(font.has_glyph('0'));
        assert!(font.has_glyph(' '));
        assert!(!font.has_glyph('~'));
        assert!(!font.has_glyph('☕'));
        assert!(!font.has_glyph('🍹'));
    }

    #[test]
    fn test_layout_scales_glyph() {
        let font = BitmapFont::new(24);
        let layout = font.layout("T");
        assert_eq!(layout.glyphs.len(), 1);

        let glyph = &layout.glyphs[0];
        assert_eq!((glyph.width, glyph.height), (15, 21));
        assert_eq!(glyph.coverage.len(), 15 * 21);
        // 'T' has its top bar across the full width
        assert!(glyph.coverage[..15].iter().all(|&c| c == 255));
    }

    #[test]
    fn test_emoji_draws_placeholder_box() {
        let font = BitmapFont::new(8);
        let layout = font.layout("🍹");
        let glyph = &layout.glyphs[0];

        assert_eq!(glyph.ch, '🍹');
        // Outline on, interior off
        assert_eq!(glyph.coverage[0], 255);
        assert_eq!(glyph.coverage[(3 * 5 + 2) as usize], 0);
        assert_eq!(glyph.coverage[(6 * 5 + 4) as usize], 255);
    }

    #[test]
    fn test_layout_skips_zero_width_and_advances() {
        let font = BitmapFont::new(8);
        let layout = font.layout("A\u{FE0F}B");
        assert_eq!(layout.glyphs.len(), 2);
        assert_eq!(layout.glyphs[0].x, 0);
        assert_eq!(layout.glyphs[1].x, 6);

        let bounds = layout.bounds();
        assert_eq!((bounds.width(), bounds.height()), (11, 7));
    }
}
