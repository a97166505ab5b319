//! Generate command implementation
//!
//! Renders every category in the table to `<out_dir>/<category_name>.png`.

use anyhow::{Context, Result};
use colored::Colorize;
use menuicon_backend_raster::{render_icon, resolve_font, ResolvedFont};
use menuicon_spec::{CategoryTable, RenderParams, TintMode};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{warn_fallback, warn_missing_glyphs};
use crate::defaults::load_table;

/// One written icon file.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedIcon {
    /// Category name (filename stem)
    pub category_name: String,
    /// Path of the written PNG
    pub path: PathBuf,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
    /// Characters the font could not render
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_glyphs: Vec<char>,
}

/// Summary of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    /// Font used for every icon
    pub font: String,
    /// Why the preferred font was not used, if it was not
    pub fallback: Option<String>,
    /// Canvas edge length in pixels
    pub size: u32,
    /// Font size in pixels
    pub font_size: u32,
    /// Tint mode used
    pub tint: TintMode,
    /// Written icons, in table order
    pub icons: Vec<GeneratedIcon>,
}

impl GenerationSummary {
    /// Paths of every written file, in table order.
    pub fn paths(&self) -> Vec<&Path> {
        self.icons.iter().map(|i| i.path.as_path()).collect()
    }
}

/// Render every table entry into `output_dir`.
///
/// Creates `output_dir` (and missing parents) first. Font load failure falls
/// back to the bitmap font with a warning; every other failure aborts the run.
/// With `quiet` set, the per-file and completion lines are not printed.
pub fn generate_all(
    table: &CategoryTable,
    output_dir: &Path,
    font: &ResolvedFont,
    params: &RenderParams,
    quiet: bool,
) -> Result<GenerationSummary> {
    params.validate()?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    if let Some(reason) = font.fallback_reason() {
        warn_fallback(reason);
    }

    let mut icons = Vec::with_capacity(table.len());
    for entry in table {
        let result = render_icon(entry, font.font(), params)
            .with_context(|| format!("Failed to render category '{}'", entry.category_name))?;

        if !result.missing_glyphs.is_empty() {
            warn_missing_glyphs(&entry.category_name, &result.missing_glyphs);
        }

        let path = output_dir.join(entry.file_name());
        fs::write(&path, &result.png_data)
            .with_context(|| format!("Failed to write icon: {}", path.display()))?;

        if !quiet {
            println!("{} {}", "Created:".green(), path.display());
        }

        icons.push(GeneratedIcon {
            category_name: entry.category_name.clone(),
            path,
            hash: result.hash,
            missing_glyphs: result.missing_glyphs,
        });
    }

    if !quiet {
        println!(
            "{}",
            "All category icons created successfully!".green().bold()
        );
    }

    Ok(GenerationSummary {
        font: font.font().name(),
        fallback: font.fallback_reason().map(|r| r.to_string()),
        size: params.size,
        font_size: params.font_size,
        tint: params.tint,
        icons,
    })
}

/// Run the generate command
///
/// # Arguments
/// * `out_dir` - Directory the PNG files are written to
/// * `font_path` - Preferred emoji font
/// * `table_path` - Optional JSON table (built-in table otherwise)
/// * `size` - Canvas edge length in pixels
/// * `font_size` - Font size in pixels
/// * `tint` - Tint mode name (`black` or `category`)
/// * `json` - Print a JSON summary instead of status lines
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    out_dir: &Path,
    font_path: &Path,
    table_path: Option<&Path>,
    size: u32,
    font_size: u32,
    tint: &str,
    json: bool,
) -> Result<ExitCode> {
    let table = load_table(table_path)?;
    let params = RenderParams::default()
        .with_size(size)
        .with_font_size(font_size)
        .with_tint(tint.parse()?);
    params.validate()?;

    let font = resolve_font(font_path, params.font_size);
    let summary = generate_all(&table, out_dir, &font, &params, json)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(ExitCode::SUCCESS)
}
