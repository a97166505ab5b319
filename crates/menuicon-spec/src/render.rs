//! Render parameters shared by every icon in a run.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Default canvas edge length in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 40;

/// Largest accepted canvas edge length.
pub const MAX_ICON_SIZE: u32 = 4096;

/// Largest accepted font size. Glyph bitmaps grow with the square of it.
pub const MAX_FONT_SIZE: u32 = 4096;

/// Which color glyph coverage is painted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TintMode {
    /// Opaque black, regardless of the category color.
    #[default]
    Black,
    /// The category's own `#RRGGBB` color.
    Category,
}

impl TintMode {
    /// Returns the mode as a string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TintMode::Black => "black",
            TintMode::Category => "category",
        }
    }
}

impl FromStr for TintMode {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(TintMode::Black),
            "category" => Ok(TintMode::Category),
            other => Err(TableError::InvalidParameter(format!(
                "unknown tint mode '{}' (expected black or category)",
                other
            ))),
        }
    }
}

/// Canvas and font sizing for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderParams {
    /// Canvas edge length in pixels (icons are square).
    pub size: u32,

    /// Font size in pixels.
    pub font_size: u32,

    /// Glyph color selection.
    #[serde(default)]
    pub tint: TintMode,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            tint: TintMode::Black,
        }
    }
}

impl RenderParams {
    /// Sets the canvas size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the tint mode.
    pub fn with_tint(mut self, tint: TintMode) -> Self {
        self.tint = tint;
        self
    }

    /// Checks that sizes are non-zero and within bounds.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.size == 0 || self.size > MAX_ICON_SIZE {
            return Err(TableError::InvalidParameter(format!(
                "size must be in 1..={}, got {}",
                MAX_ICON_SIZE, self.size
            )));
        }
        if self.font_size == 0 || self.font_size > MAX_FONT_SIZE {
            return Err(TableError::InvalidParameter(format!(
                "font_size must be in 1..={}, got {}",
                MAX_FONT_SIZE, self.font_size
            )));
        }
        Ok(())
    }
}
