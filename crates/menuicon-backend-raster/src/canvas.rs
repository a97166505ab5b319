//! Square RGBA canvas that glyphs are composited onto.

use crate::color::Color;

/// A 2D RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a square canvas of fully transparent white.
    pub fn transparent(size: u32) -> Self {
        Self::new(size, size, Color::transparent_white())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// Blend `color` into the pixel at signed coordinates, weighted by an 8-bit
    /// coverage value. Coordinates outside the canvas are ignored.
    ///
    /// Every channel, alpha included, moves toward the ink by
    /// `coverage * color.a`, so full coverage replaces the pixel outright.
    pub fn blend_coverage(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }

        let dst = self.get(x, y);
        let t = (coverage as f64 / 255.0) * color.a;
        self.set(x, y, dst.lerp(&color, t));
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}
