//! Category icon rendering.
//!
//! One call per category: allocate a transparent square canvas, center the
//! emoji's ink box on it, composite the glyph coverage in the selected tint
//! and encode the result as PNG.

use menuicon_spec::{CategoryIcon, RenderParams, TableError, TintMode};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::{Color, ColorParseError};
use crate::font::{GlyphFont, TextLayout};
use crate::layout::{centered_origin, is_zero_width, TextBounds};
use crate::png::{write_rgba_to_vec_with_hash, PngConfig, PngError};

/// Errors that can occur while rendering an icon.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Render parameters out of range.
    #[error(transparent)]
    InvalidParameter(#[from] TableError),

    /// Category color could not be parsed for tinting.
    #[error("category '{0}': {1}")]
    InvalidColor(String, ColorParseError),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] PngError),
}

/// A rendered icon.
#[derive(Debug)]
pub struct IconResult {
    /// The composited canvas.
    pub canvas: Canvas,
    /// PNG-encoded image data.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG data.
    pub hash: String,
    /// Canvas position of the ink box's top-left corner.
    pub origin: (i32, i32),
    /// Ink box of the emoji relative to the draw origin.
    pub bounds: TextBounds,
    /// Visible characters the font has no glyph for, or whose glyph leaves
    /// no ink.
    pub missing_glyphs: Vec<char>,
}

/// Visible characters of `text` that `font` cannot render.
///
/// A character counts as missing when the font has no glyph for it, or when
/// its glyph rasterizes to nothing (bitmap-only color emoji fonts map emoji
/// to glyphs without outlines). Whitespace is allowed to be blank.
pub fn missing_glyphs(font: &dyn GlyphFont, text: &str) -> Vec<char> {
    missing_in_layout(font, &font.layout(text))
}

fn missing_in_layout(font: &dyn GlyphFont, layout: &TextLayout) -> Vec<char> {
    let mut missing: Vec<char> = Vec::new();
    for glyph in &layout.glyphs {
        let ch = glyph.ch;
        if is_zero_width(ch) || missing.contains(&ch) {
            continue;
        }
        let blank = glyph.bounds().is_none() && !ch.is_whitespace();
        if !font.has_glyph(ch) || blank {
            missing.push(ch);
        }
    }
    missing
}

fn ink_color(entry: &CategoryIcon, tint: TintMode) -> Result<Color, RenderError> {
    match tint {
        TintMode::Black => Ok(Color::black()),
        TintMode::Category => Color::from_hex_rgb(&entry.color)
            .map_err(|e| RenderError::InvalidColor(entry.category_name.clone(), e)),
    }
}

/// Render one category's emoji onto a `size × size` transparent canvas.
pub fn render_icon(
    entry: &CategoryIcon,
    font: &dyn GlyphFont,
    params: &RenderParams,
) -> Result<IconResult, RenderError> {
    params.validate()?;
    let ink = ink_color(entry, params.tint)?;

    let mut canvas = Canvas::transparent(params.size);
    let layout = font.layout(&entry.emoji);
    let bounds = layout.bounds();
    let (ix, iy) = centered_origin(params.size, &bounds);
    // Layout coordinates are relative to the line box; shift so the ink box
    // itself starts at the centered position.
    let (ox, oy) = (ix - bounds.left, iy - bounds.top);

    for glyph in &layout.glyphs {
        let width = glyph.width as usize;
        for (i, &coverage) in glyph.coverage.iter().enumerate() {
            let (gx, gy) = ((i % width) as i32, (i / width) as i32);
            canvas.blend_coverage(ox + glyph.x + gx, oy + glyph.y + gy, ink, coverage);
        }
    }

    let (png_data, hash) = write_rgba_to_vec_with_hash(&canvas, &PngConfig::default())?;

    Ok(IconResult {
        canvas,
        png_data,
        hash,
        origin: (ix, iy),
        bounds,
        missing_glyphs: missing_in_layout(font, &layout),
    })
}
