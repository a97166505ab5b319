//! Font resolution and glyph layout.
//!
//! Icons are drawn with a TrueType/OpenType emoji font when one can be loaded
//! from the configured path. Otherwise the bundled 5x7 bitmap font is used and
//! the reason is reported through [`FallbackReason`] so callers can warn.

mod bitmap;
mod truetype;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::layout::TextBounds;

pub use bitmap::BitmapFont;
pub use truetype::TrueTypeFont;

/// Errors that can occur while loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("font parse error: {0}")]
    Parse(String),
}

/// A rasterized glyph positioned relative to the draw origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub ch: char,
    /// Left edge of the coverage bitmap.
    pub x: i32,
    /// Top edge of the coverage bitmap (y grows downward).
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// 8-bit coverage, row-major, `width * height` entries.
    pub coverage: Vec<u8>,
}

impl PlacedGlyph {
    /// Ink box of this glyph, or `None` if it has no covered pixels.
    pub fn bounds(&self) -> Option<TextBounds> {
        if self.width == 0 || self.height == 0 || self.coverage.iter().all(|&c| c == 0) {
            return None;
        }
        Some(TextBounds {
            left: self.x,
            top: self.y,
            right: self.x + self.width as i32,
            bottom: self.y + self.height as i32,
        })
    }
}

/// Glyphs of a laid-out string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayout {
    pub glyphs: Vec<PlacedGlyph>,
}

impl TextLayout {
    /// Union of every glyph's ink box.
    pub fn bounds(&self) -> TextBounds {
        self.glyphs
            .iter()
            .filter_map(PlacedGlyph::bounds)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_default()
    }
}

/// A font that can lay out and rasterize text.
///
/// Layout coordinates put the draw origin at the top-left corner of the line
/// box, so a glyph drawn at origin `(x, y)` lands at `(x + glyph.x, y + glyph.y)`.
pub trait GlyphFont {
    /// Human-readable font name for reports.
    fn name(&self) -> String;

    /// Whether the font has a real glyph for `ch`.
    fn has_glyph(&self, ch: char) -> bool;

    /// Lay out and rasterize `text`. Zero-width characters are skipped.
    fn layout(&self, text: &str) -> TextLayout;
}

/// Why the preferred font was not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No file at the configured path.
    NotFound(PathBuf),
    /// The file exists but could not be read or parsed.
    LoadFailed { path: PathBuf, message: String },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NotFound(path) => {
                write!(f, "font not found at {}", path.display())
            }
            FallbackReason::LoadFailed { path, message } => {
                write!(f, "failed to load font {}: {}", path.display(), message)
            }
        }
    }
}

/// Outcome of font resolution: the font to draw with, plus the fallback
/// reason when it is the bundled bitmap font.
pub struct ResolvedFont {
    font: Box<dyn GlyphFont>,
    fallback: Option<FallbackReason>,
}

impl ResolvedFont {
    pub fn font(&self) -> &dyn GlyphFont {
        self.font.as_ref()
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        self.fallback.as_ref()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("font", &self.font.name())
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Load the font at `path` at `font_size` pixels, falling back to the bundled
/// bitmap font if the file is missing or unusable. Never fails.
pub fn resolve_font(path: &Path, font_size: u32) -> ResolvedFont {
    if !path.is_file() {
        return ResolvedFont {
            font: Box::new(BitmapFont::new(font_size)),
            fallback: Some(FallbackReason::NotFound(path.to_path_buf())),
        };
    }

    match TrueTypeFont::load(path, font_size) {
        Ok(font) => ResolvedFont {
            font: Box::new(font),
            fallback: None,
        },
        Err(e) => ResolvedFont {
            font: Box::new(BitmapFont::new(font_size)),
            fallback: Some(FallbackReason::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-font.ttf");

        let resolved = resolve_font(&path, 40);
        assert!(resolved.is_fallback());
        assert_eq!(
            resolved.fallback_reason(),
            Some(&FallbackReason::NotFound(path.clone()))
        );
        assert!(resolved.font().has_glyph('A'));
    }

    #[test]
    fn test_corrupt_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let resolved = resolve_font(&path, 40);
        match resolved.fallback_reason() {
            Some(FallbackReason::LoadFailed { path: p, .. }) => assert_eq!(p, &path),
            other => panic!("expected LoadFailed, got {:?}", other),
        }
        assert!(resolved.font().name().contains("bitmap"));
    }

    #[test]
    fn test_directory_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_font(dir.path(), 40);
        assert!(matches!(
            resolved.fallback_reason(),
            Some(FallbackReason::NotFound(_))
        ));
    }

    #[test]
    fn test_layout_bounds_ignore_blank_glyphs() {
        let layout = TextLayout {
            glyphs: vec![
                PlacedGlyph {
                    ch: ' ',
                    x: 0,
                    y: 0,
                    width: 5,
                    height: 7,
                    coverage: vec![0; 35],
                },
                PlacedGlyph {
                    ch: 'x',
                    x: 6,
                    y: 1,
                    width: 2,
                    height: 3,
                    coverage: vec![255; 6],
                },
            ],
        };
        assert_eq!(
            layout.bounds(),
            TextBounds {
                left: 6,
                top: 1,
                right: 8,
                bottom: 4
            }
        );
    }
}
