//! One-line status output on stderr.

use owo_colors::OwoColorize;

use super::colors_enabled;

fn status(symbol: &str, colored: String, message: &str) {
    if colors_enabled() {
        eprintln!("{colored} {message}");
    } else {
        eprintln!("{symbol} {message}");
    }
}

/// Run finished.
pub fn success(message: &str) {
    status("✓", "✓".green().bold().to_string(), message);
}

pub fn info(message: &str) {
    status("ℹ", "ℹ".cyan().to_string(), message);
}

/// Something the user should look at; the run continues.
pub fn warning(message: &str) {
    status("!", "!".yellow().bold().to_string(), message);
}
