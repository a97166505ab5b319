//! List command implementation
//!
//! Prints the category table, including the label and color metadata that
//! default rendering does not use.

use anyhow::Result;
use colored::Colorize;
use menuicon_spec::CategoryTable;
use std::path::Path;
use std::process::ExitCode;

use crate::defaults::load_table;

/// Format one table row for display.
pub fn format_row(name_width: usize, name: &str, emoji: &str, label: &str, color: &str) -> String {
    format!(
        "{:<width$}  {}  {}  {}",
        name,
        emoji,
        color,
        label,
        width = name_width
    )
}

fn print_table(table: &CategoryTable) {
    let name_width = table
        .iter()
        .map(|c| c.category_name.len())
        .max()
        .unwrap_or(0);

    for entry in table {
        println!(
            "{}",
            format_row(
                name_width,
                &entry.category_name,
                &entry.emoji,
                &entry.chinese_name,
                &entry.color,
            )
        );
    }
}

/// Run the list command
///
/// # Arguments
/// * `table_path` - Optional JSON table (built-in table otherwise)
/// * `json` - Print the table as JSON
pub fn run(table_path: Option<&Path>, json: bool) -> Result<ExitCode> {
    let table = load_table(table_path)?;

    if json {
        println!("{}", table.to_json_pretty()?);
    } else {
        println!(
            "{} {} categories",
            "Table:".blue().bold(),
            table.len()
        );
        print_table(&table);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_pads_name_column() {
        let row = format_row(9, "tea", "🍵", "奶茶", "#00CED1");
        assert_eq!(row, "tea        🍵  #00CED1  奶茶");
    }

    #[test]
    fn run_builtin_table() {
        assert_eq!(run(None, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(None, true).unwrap(), ExitCode::SUCCESS);
    }
}
