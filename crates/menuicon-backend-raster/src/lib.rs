//! Menuicon Raster Backend
//!
//! This crate turns a category entry into a square RGBA icon: it resolves a
//! font (a TrueType/OpenType emoji font, or the bundled bitmap font when that
//! is unavailable), lays the emoji out centered on a transparent canvas,
//! composites the glyph coverage and encodes the result as PNG.
//!
//! # Example
//!
//! ```no_run
//! use menuicon_backend_raster::{render_icon, resolve_font};
//! use menuicon_spec::{CategoryTable, RenderParams};
//! use std::path::Path;
//!
//! let params = RenderParams::default();
//! let font = resolve_font(Path::new("/usr/share/fonts/emoji.ttf"), params.font_size);
//! for entry in &CategoryTable::builtin() {
//!     let icon = render_icon(entry, font.font(), &params).unwrap();
//!     std::fs::write(entry.file_name(), &icon.png_data).unwrap();
//! }
//! ```
//!
//! # Determinism
//!
//! Same font file + same table + same parameters = byte-identical PNG output.
//! PNG encoding uses fixed compression settings and no variable metadata.

pub mod canvas;
pub mod color;
pub mod font;
pub mod icon;
pub mod layout;
pub mod png;

// Re-export main types for convenience
pub use canvas::Canvas;
pub use color::{Color, ColorParseError};
pub use font::{
    resolve_font, BitmapFont, FallbackReason, FontError, GlyphFont, PlacedGlyph, ResolvedFont,
    TextLayout, TrueTypeFont,
};
pub use icon::{missing_glyphs, render_icon, IconResult, RenderError};
pub use layout::{centered_origin, is_zero_width, TextBounds};
pub use crate::png::{PngConfig, PngError};
