//! TrueType/OpenType glyph rasterization via `fontdue`.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use menuicon_spec::MAX_FONT_SIZE;

use super::{FontError, GlyphFont, PlacedGlyph, TextLayout};
use crate::layout::is_zero_width;

/// An outline font loaded from disk at a fixed pixel size.
pub struct TrueTypeFont {
    font: Font,
    path: PathBuf,
    px: f32,
}

impl TrueTypeFont {
    /// Read and parse the font file at `path`. Collections (`.ttc`) use
    /// their first face.
    pub fn load(path: &Path, font_size: u32) -> Result<Self, FontError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data, path, font_size)
    }

    /// Parse font data already in memory; `path` is only used for reporting.
    /// Sizes above [`MAX_FONT_SIZE`] are treated as the maximum.
    pub fn from_bytes(data: Vec<u8>, path: &Path, font_size: u32) -> Result<Self, FontError> {
        let px = font_size.min(MAX_FONT_SIZE) as f32;
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(|e| FontError::Parse(e.to_string()))?;

        Ok(Self {
            font,
            path: path.to_path_buf(),
            px,
        })
    }

    /// Distance from the top of the line box to the baseline.
    fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent)
            .unwrap_or(self.px)
    }
}

impl GlyphFont for TrueTypeFont {
    fn name(&self) -> String {
        match self.font.name() {
            Some(name) => format!("{} ({})", name, self.path.display()),
            None => self.path.display().to_string(),
        }
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }

    fn layout(&self, text: &str) -> TextLayout {
        let baseline = self.ascent().round() as i32;
        let mut glyphs = Vec::new();
        let mut pen_x = 0.0f32;

        for ch in text.chars().filter(|&c| !is_zero_width(c)) {
            let (metrics, coverage) = self.font.rasterize(ch, self.px);

            // fontdue's ymin is the bitmap's bottom edge measured up from the baseline
            let top = baseline - (metrics.ymin + metrics.height as i32);
            glyphs.push(PlacedGlyph {
                ch,
                x: pen_x.round() as i32 + metrics.xmin,
                y: top,
                width: metrics.width as u32,
                height: metrics.height as u32,
                coverage,
            });
            pen_x += metrics.advance_width;
        }

        TextLayout { glyphs }
    }
}

impl std::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("path", &self.path)
            .field("px", &self.px)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        let err = TrueTypeFont::from_bytes(vec![0u8; 64], Path::new("zeros.ttf"), 40).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TrueTypeFont::load(&dir.path().join("absent.ttf"), 40).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
