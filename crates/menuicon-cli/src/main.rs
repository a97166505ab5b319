//! Menuicon CLI - Command-line interface for menu category icon generation
//!
//! This binary renders each category's emoji onto a transparent square
//! canvas and writes one PNG per category.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use menuicon_cli::commands;
use menuicon_cli::defaults::{default_font_path, DEFAULT_OUT_DIR};
use menuicon_spec::{DEFAULT_FONT_SIZE, DEFAULT_ICON_SIZE};

/// Menuicon - Emoji category icon generator
#[derive(Parser)]
#[command(name = "menuicon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every category to <out-dir>/<category>.png
    Generate {
        /// Output directory (created if missing)
        #[arg(short, long, env = "MENUICON_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Emoji font file (falls back to a bundled bitmap font if unusable)
        #[arg(short, long, env = "MENUICON_FONT")]
        font: Option<PathBuf>,

        /// JSON category table (default: built-in table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Icon edge length in pixels
        #[arg(long, default_value_t = DEFAULT_ICON_SIZE)]
        size: u32,

        /// Font size in pixels
        #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
        font_size: u32,

        /// Glyph color: always black, or each category's own color
        #[arg(long, default_value = "black", value_parser = ["black", "category"])]
        tint: String,

        /// Print a JSON summary instead of status lines
        #[arg(long)]
        json: bool,
    },

    /// Print the category table
    List {
        /// JSON category table (default: built-in table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check font availability and glyph coverage
    Doctor {
        /// Emoji font file to check
        #[arg(short, long, env = "MENUICON_FONT")]
        font: Option<PathBuf>,

        /// JSON category table (default: built-in table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Font size in pixels
        #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
        font_size: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            font,
            table,
            size,
            font_size,
            tint,
            json,
        } => commands::generate::run(
            &out_dir,
            &font.unwrap_or_else(default_font_path),
            table.as_deref(),
            size,
            font_size,
            &tint,
            json,
        ),
        Commands::List { table, json } => commands::list::run(table.as_deref(), json),
        Commands::Doctor {
            font,
            table,
            font_size,
        } => commands::doctor::run(
            &font.unwrap_or_else(default_font_path),
            table.as_deref(),
            font_size,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
