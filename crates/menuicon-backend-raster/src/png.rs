//! PNG encoding for finished icons.
//!
//! Icons are checked into the web app's asset tree, so regenerating them
//! must not churn files that did not change. The encoder therefore runs with
//! one fixed compression level and filter, writes no time or text chunks,
//! and the BLAKE3 digest of the bytes is reported alongside each icon.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::canvas::Canvas;

/// Errors from PNG encoding.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// Encoder settings. Every icon in a run shares one config.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Encode `canvas` as 8-bit RGBA into `writer`.
pub fn write_rgba_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgba8())?;

    Ok(())
}

/// Hex BLAKE3 digest of encoded icon bytes.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode `canvas` in memory, returning the bytes and their digest.
pub fn write_rgba_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
