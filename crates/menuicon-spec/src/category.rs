//! Category icon entries and the validated category table.
//!
//! A table maps short ASCII category names to the emoji drawn for them. The
//! Chinese label and the hex color travel with each entry as metadata; the
//! renderer only reads the color when category tinting is requested.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Category names double as filename stems, so path separators and dots are excluded.
const CATEGORY_NAME_PATTERN: &str = r"^[a-z0-9][a-z0-9_-]{0,63}$";

const HEX_COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

static CATEGORY_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn category_name_regex() -> &'static Regex {
    CATEGORY_NAME_REGEX
        .get_or_init(|| Regex::new(CATEGORY_NAME_PATTERN).expect("invalid regex pattern"))
}

fn hex_color_regex() -> &'static Regex {
    HEX_COLOR_REGEX.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).expect("invalid regex pattern"))
}

/// Checks if a category name is usable as an output filename stem.
pub fn is_valid_category_name(name: &str) -> bool {
    category_name_regex().is_match(name)
}

/// Checks if a color string has the `#RRGGBB` form.
pub fn is_valid_hex_color(color: &str) -> bool {
    hex_color_regex().is_match(color)
}

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryIcon {
    /// Short identifier, also the output filename stem (e.g., "coffee").
    pub category_name: String,

    /// Emoji glyph or sequence to render.
    pub emoji: String,

    /// Display label. Not used by rendering.
    pub chinese_name: String,

    /// Category color as `#RRGGBB`.
    pub color: String,
}

impl CategoryIcon {
    /// Creates a new entry.
    pub fn new(
        category_name: impl Into<String>,
        emoji: impl Into<String>,
        chinese_name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            category_name: category_name.into(),
            emoji: emoji.into(),
            chinese_name: chinese_name.into(),
            color: color.into(),
        }
    }

    /// Output filename for this entry (`<category_name>.png`).
    pub fn file_name(&self) -> String {
        format!("{}.png", self.category_name)
    }

    fn validate(&self) -> Result<(), TableError> {
        if !is_valid_category_name(&self.category_name) {
            return Err(TableError::InvalidName(self.category_name.clone()));
        }
        if self.emoji.trim().is_empty() {
            return Err(TableError::EmptyEmoji(self.category_name.clone()));
        }
        if !is_valid_hex_color(&self.color) {
            return Err(TableError::InvalidColor(
                self.category_name.clone(),
                self.color.clone(),
            ));
        }
        Ok(())
    }
}

/// A validated, immutable list of category entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTable {
    categories: Vec<CategoryIcon>,
}

/// On-disk table layout.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    categories: Vec<CategoryIcon>,
}

impl CategoryTable {
    /// Builds a table, rejecting empty tables, duplicate names and malformed entries.
    pub fn new(categories: Vec<CategoryIcon>) -> Result<Self, TableError> {
        if categories.is_empty() {
            return Err(TableError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &categories {
            entry.validate()?;
            if !seen.insert(entry.category_name.as_str()) {
                return Err(TableError::DuplicateName(entry.category_name.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// The built-in menu category table.
    pub fn builtin() -> Self {
        let categories = [
            ("fruit", "🍹", "果茶", "#FF6B6B"),
            ("coffee", "☕", "咖啡", "#8B4513"),
            ("snack", "🍿", "小吃", "#FFA500"),
            ("tea", "🍵", "奶茶", "#00CED1"),
            ("milktea", "🧋", "奶茶", "#FF69B4"),
            ("ice", "🍦", "冰品", "#87CEEB"),
            ("dessert", "🍰", "甜点", "#FFB6C1"),
            ("breakfast", "🍳", "早餐", "#FFD700"),
        ]
        .into_iter()
        .map(|(name, emoji, label, color)| CategoryIcon::new(name, emoji, label, color))
        .collect();

        Self { categories }
    }

    /// Parses a table from JSON (`{"categories": [...]}`) and validates it.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::new(file.categories)
    }

    /// Serializes the table to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up an entry by category name.
    pub fn get(&self, category_name: &str) -> Option<&CategoryIcon> {
        self.categories
            .iter()
            .find(|c| c.category_name == category_name)
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryIcon> {
        self.categories.iter()
    }

    // Never zero: construction rejects empty tables.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

impl<'a> IntoIterator for &'a CategoryTable {
    type Item = &'a CategoryIcon;
    type IntoIter = std::slice::Iter<'a, CategoryIcon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
