//! Color utilities for icon rendering.

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}': expected #RRGGBB")]
pub struct ColorParseError(pub String);

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Fully transparent white, the icon background.
    pub const fn transparent_white() -> Self {
        Self::rgba(1.0, 1.0, 1.0, 0.0)
    }

    /// Parse a `#RRGGBB` hex string into an opaque color.
    pub fn from_hex_rgb(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorParseError(hex.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorParseError(hex.to_string()))
        };

        Ok(Self::from_rgb8([channel(0)?, channel(2)?, channel(4)?]))
    }

    /// Linearly interpolate between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as f64 / 255.0,
            g: rgb[1] as f64 / 255.0,
            b: rgb[2] as f64 / 255.0,
            a: 1.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb() {
        let c = Color::from_hex_rgb("#FF6B6B").unwrap();
        assert_eq!(c.to_rgba8(), [0xFF, 0x6B, 0x6B, 0xFF]);

        let c = Color::from_hex_rgb("#8b4513").unwrap();
        assert_eq!(c.to_rgba8(), [0x8B, 0x45, 0x13, 0xFF]);
    }

    #[test]
    fn test_from_hex_rgb_rejects_malformed() {
        for bad in ["", "#", "FF6B6B", "#FF6B6", "#FF6B6BFF", "#FF6B6G", "#ＦＦ6B6B"] {
            assert!(Color::from_hex_rgb(bad).is_err(), "{:?} should fail", bad);
        }
    }

    #[test]
    fn test_transparent_white_bytes() {
        assert_eq!(Color::transparent_white().to_rgba8(), [255, 255, 255, 0]);
    }

    #[test]
    fn test_lerp() {
        let mid = Color::transparent_white().lerp(&Color::black(), 0.5);
        assert!((mid.r - 0.5).abs() < 1e-10);
        assert!((mid.g - 0.5).abs() < 1e-10);
        assert!((mid.b - 0.5).abs() < 1e-10);
        assert!((mid.a - 0.5).abs() < 1e-10);

        // t is clamped
        let ink = Color::rgb(0.2, 0.4, 0.6);
        assert_eq!(Color::black().lerp(&ink, 2.0), ink);
    }
}
