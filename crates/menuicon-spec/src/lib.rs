//! Menuicon Category Table Library
//!
//! This crate provides the data model for menu category icons: the table of
//! categories (identifier, emoji, label, color) and the render parameters
//! shared by the raster backend and the CLI.
//!
//! # Example
//!
//! ```
//! use menuicon_spec::{CategoryIcon, CategoryTable, RenderParams};
//!
//! let table = CategoryTable::new(vec![
//!     CategoryIcon::new("fruit", "🍹", "果茶", "#FF6B6B"),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(RenderParams::default().size, 64);
//! ```
//!
//! # Modules
//!
//! - [`category`]: Category entries and the validated table
//! - [`error`]: Table and parameter validation errors
//! - [`render`]: Canvas size, font size and tint selection

pub mod category;
pub mod error;
pub mod render;

pub use category::{is_valid_category_name, is_valid_hex_color, CategoryIcon, CategoryTable};
pub use error::TableError;
pub use render::{
    RenderParams, TintMode, DEFAULT_FONT_SIZE, DEFAULT_ICON_SIZE, MAX_FONT_SIZE,
    MAX_ICON_SIZE,
};
