//! Centralized warning and prompt messages for CLI output.
//!
//! Everything here goes to stderr; stdout carries only passwords.

use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;

use super::quiet;
use crate::pass::entropy;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Printed once per batch when the requested length was widened.
pub fn length_widened(requested: usize, effective: usize, classes: usize) {
    warn(&format!(
        "Password length ({requested}) is too short for selected types ({classes}). \
         Generating with length {effective}."
    ));
}

/// Entropy summary line - suppressed in quiet mode
pub fn entropy_summary(bits: f64) {
    if !quiet::enabled() {
        eprintln!(
            "{}",
            format!("Entropy: {bits:.1} bits ({})", entropy::strength(bits)).dark_grey()
        );
    }
}

/// Print history save confirmation - suppressed in quiet mode
pub fn passwords_saved(count: usize, path: &Path) {
    if !quiet::enabled() {
        let full_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        eprintln!("{count} password(s) \u{2192} {}", full_path.display());
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
