//! Platform defaults and table loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use menuicon_spec::CategoryTable;

/// Output directory used when neither `--out-dir` nor `MENUICON_OUT_DIR` is set.
pub const DEFAULT_OUT_DIR: &str = "public/images/categories";

/// Emoji font path for the current platform.
///
/// Apple Color Emoji stores emoji as sbix bitmaps only, which the outline
/// rasterizer cannot draw; on macOS every emoji is reported as missing until
/// `--font` points at an outline emoji font such as Noto Emoji.
pub fn default_font_path() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from(r"C:\Windows\Fonts\seguiemj.ttf")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/System/Library/Fonts/Apple Color Emoji.ttc")
    } else {
        PathBuf::from("/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf")
    }
}

/// Load the category table from a JSON file, or return the built-in table.
pub fn load_table(path: Option<&Path>) -> Result<CategoryTable> {
    let Some(path) = path else {
        return Ok(CategoryTable::builtin());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file: {}", path.display()))?;
    CategoryTable::from_json(&json)
        .with_context(|| format!("Invalid table file: {}", path.display()))
}
