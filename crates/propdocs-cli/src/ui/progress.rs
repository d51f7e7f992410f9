//! Progress bar for a batch of component builds.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// One bar counting finished components.
///
/// Workers report through a shared reference; `ProgressBar` is internally
/// synchronized.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Bar over `total` components; hidden unless `visible`.
    pub fn new(total: u64, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Mark one component as done.
    pub fn component_done(&self, name: &str) {
        self.bar.set_message(format!("{}", name.dimmed()));
        self.bar.inc(1);
    }

    /// Number of components reported so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar and print a completion line.
    pub fn finish(&self, message: &str) {
        self.bar.finish_and_clear();
        if !self.bar.is_hidden() {
            eprintln!("{} {}", "✓".green().bold(), message);
        }
    }

    /// Clear the bar after a failed batch.
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
