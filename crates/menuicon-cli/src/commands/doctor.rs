//! Doctor command implementation
//!
//! Reports which font would be used and whether it can draw every emoji in
//! the table, without writing any files.

use anyhow::Result;
use colored::Colorize;
use menuicon_backend_raster::{missing_glyphs, resolve_font, ResolvedFont};
use menuicon_spec::{CategoryTable, RenderParams};
use std::path::Path;
use std::process::ExitCode;

use crate::defaults::load_table;

/// Categories whose emoji the resolved font cannot fully render, either for
/// lack of a glyph or because the glyph draws nothing.
pub fn uncovered_categories(table: &CategoryTable, font: &ResolvedFont) -> Vec<(String, Vec<char>)> {
    table
        .iter()
        .filter_map(|entry| {
            let missing = missing_glyphs(font.font(), &entry.emoji);
            (!missing.is_empty()).then(|| (entry.category_name.clone(), missing))
        })
        .collect()
}

/// Run the doctor command
///
/// # Returns
/// Exit code: 0 if every emoji draws visibly, 1 otherwise
pub fn run(font_path: &Path, table_path: Option<&Path>, font_size: u32) -> Result<ExitCode> {
    RenderParams::default().with_font_size(font_size).validate()?;

    println!("{}", "Menuicon Doctor".cyan().bold());
    println!("{}", "===============".cyan());
    println!();

    let table = load_table(table_path)?;
    let font = resolve_font(font_path, font_size);

    println!("{}", "Font:".bold());
    match font.fallback_reason() {
        None => println!("  {} {}", "ok".green(), font.font().name()),
        Some(reason) => {
            println!("  {} {}", "!!".yellow(), reason);
            println!(
                "     {}",
                format!("Falling back to {}", font.font().name()).dimmed()
            );
        }
    }
    println!();

    println!("{}", "Glyph coverage:".bold());
    let uncovered = uncovered_categories(&table, &font);
    for entry in &table {
        match uncovered.iter().find(|(name, _)| *name == entry.category_name) {
            None => println!("  {} {} {}", "ok".green(), entry.category_name, entry.emoji),
            Some((_, missing)) => {
                let chars: Vec<String> = missing
                    .iter()
                    .map(|c| format!("U+{:04X}", *c as u32))
                    .collect();
                println!(
                    "  {} {} {} (missing {})",
                    "!!".red(),
                    entry.category_name,
                    entry.emoji,
                    chars.join(", ")
                );
            }
        }
    }
    println!();

    if uncovered.is_empty() {
        println!("{}", "All checks passed.".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{}",
            format!(
                "{} of {} categories would render placeholder or blank glyphs.",
                uncovered.len(),
                table.len()
            )
            .red()
            .bold()
        );
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuicon_spec::CategoryIcon;

    #[test]
    fn fallback_font_leaves_emoji_uncovered() {
        let tmp = tempfile::tempdir().unwrap();
        let font = resolve_font(&tmp.path().join("no-font.ttf"), 40);
        let table = CategoryTable::new(vec![
            CategoryIcon::new("coffee", "☕", "咖啡", "#8B4513"),
            CategoryIcon::new("ascii", "OK", "", "#000000"),
        ])
        .unwrap();

        let uncovered = uncovered_categories(&table, &font);
        assert_eq!(uncovered, vec![("coffee".to_string(), vec!['☕'])]);
    }

    #[test]
    fn doctor_rejects_oversized_font() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(run(&tmp.path().join("no-font.ttf"), None, 200_000).is_err());
    }

    #[test]
    fn doctor_fails_without_emoji_font() {
        let tmp = tempfile::tempdir().unwrap();
        let code = run(&tmp.path().join("no-font.ttf"), None, 40).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
