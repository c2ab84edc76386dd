//! CLI output formatting.
//!
//! Every message has a `format_*` function returning lines, so the wording is
//! testable without capturing stdout. `main` does the printing.
//!
//! ```text
//! ✅ Successfully resized image to 512x512
//! 📁 Saved as: emoji_512x512.png
//! 📊 Original size: 12.3 KB
//! 📊 New size: 98.7 KB
//! ```
//!
//! Failures are a single line starting with `❌`.

use crate::config::ConfigError;
use crate::imaging::{ResizeError, ResizeReport};

pub fn format_report(report: &ResizeReport) -> Vec<String> {
    vec![
        format!("✅ Successfully resized image to {}", report.target),
        format!("📁 Saved as: {}", report.output.display()),
        format!("📊 Original size: {:.1} KB", report.original_kb()),
        format!("📊 New size: {:.1} KB", report.new_kb()),
    ]
}

pub fn format_resize_error(err: &ResizeError) -> String {
    match err {
        ResizeError::NotFound(_) => format!("❌ Error: {}", err),
        ResizeError::Processing(msg) => format!("❌ Error resizing image: {}", msg),
    }
}

pub fn format_config_error(err: &ConfigError) -> String {
    format!("❌ Error loading config: {}", err)
}

/// Usage text shown when no input image is given.
pub fn usage_lines(program: &str) -> Vec<String> {
    vec![
        format!("Usage: {program} <input_image> [output_image]"),
        format!("Example: {program} emoji.png"),
        format!("         {program} emoji.png emoji_resized.png"),
    ]
}

pub fn print_report(report: &ResizeReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}
