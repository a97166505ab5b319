//! CLI command implementations

pub mod doctor;
pub mod generate;
pub mod list;

use colored::Colorize;
use menuicon_backend_raster::FallbackReason;

/// Print a warning line to stderr.
pub(crate) fn warn(message: &str) {
    eprintln!("{} {}", "WARN".yellow().bold(), message);
}

pub(crate) fn warn_fallback(reason: &FallbackReason) {
    warn(&format!(
        "{}; using the bundled bitmap font (emoji will render as placeholder boxes)",
        reason
    ));
}

pub(crate) fn warn_missing_glyphs(category_name: &str, missing: &[char]) {
    let chars: Vec<String> = missing
        .iter()
        .map(|c| format!("'{}' (U+{:04X})", c, *c as u32))
        .collect();
    warn(&format!(
        "font draws nothing visible for {} in category '{}'",
        chars.join(", "),
        category_name
    ));
}
