//! Terminal UI utilities: status lines and batch progress.
//!
//! Progress is hidden when stderr is not a terminal or when running in CI,
//! so piped output only carries log lines.
//!
//! ```no_run
//! use propdocs_cli::ui;
//!
//! let progress = ui::BatchProgress::new(120, false);
//! progress.component_done("Button");
//! progress.finish("Built 120 components");
//! ui::success("API pages written");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

mod messages;
mod progress;

pub use messages::{info, success, warning};
pub use progress::BatchProgress;

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
}

/// Whether interactive output (spinners, bars) makes sense.
pub fn is_interactive() -> bool {
    console::user_attended_stderr() && !is_ci()
}

static COLORS: AtomicBool = AtomicBool::new(true);

/// Whether status lines are colored.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Decide color support once, early in `main`.
///
/// `--no-color` and `NO_COLOR` disable colors, `FORCE_COLOR` forces them,
/// otherwise the terminal decides.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    COLORS.store(enabled, Ordering::Relaxed);
}
