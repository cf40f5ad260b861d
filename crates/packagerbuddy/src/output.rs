//! Terminal output utilities
//!
//! Results (paths, names) are printed to stdout as plain lines so they can
//! be piped. Status messages are styled and go to stderr.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Print one result line
pub fn result(line: impl std::fmt::Display) {
    println!("{}", line);
}

/// Print a path as a result line
pub fn path(path: &Path) {
    result(path.display());
}

/// Print a success message
pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Create a spinner, hidden when `quiet` is set
pub fn spinner(msg: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
