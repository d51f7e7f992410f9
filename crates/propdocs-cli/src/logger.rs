//! Logging infrastructure for the propdocs CLI.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer, so the JSON
//! artifacts are the only thing a run produces on disk and stdout stays
//! free for tooling.
//!
//! ```rust,no_run
//! use propdocs_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!(component = "Button", "built API data");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "propdocs=debug,propdocs_cli=debug";
const QUIET_FILTER: &str = "propdocs=error,propdocs_cli=error";
const DEFAULT_FILTER: &str = "propdocs=info,propdocs_cli=info";

/// Filter for the given verbosity flags.
///
/// 1. `--verbose`: debug for the propdocs crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`, when set
/// 4. info for the propdocs crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // try_init: a second initialization (tests driving commands in-process)
    // keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

/// Whether ANSI colors should be used on stderr.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
