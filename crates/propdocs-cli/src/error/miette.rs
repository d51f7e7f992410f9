//! Conversion of CLI errors into miette reports.

use ::miette::Report;
use propdocs::DocsError;

use super::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docs(e) => docs_error_to_miette(e),
        CliError::Config(e) => ::miette::miette!("Configuration error: {}", e),
        CliError::ComponentsFailed { failed, total } => ::miette::miette!(
            "{} of {} components failed to build\n\nHint: Fix the errors logged above, or narrow the run with --grep",
            failed,
            total
        ),
        _ => ::miette::miette!("{}", err),
    }
}

/// Convert DocsError to miette Report
pub fn docs_error_to_miette(err: DocsError) -> Report {
    match err {
        DocsError::MissingDescription { path, prop } => ::miette::miette!(
            "Prop '{}' of {} doesn't have a description\n\nHint: Add a JSDoc comment above the propTypes entry, or tag it with @ignore",
            prop,
            path.display()
        ),
        DocsError::Refinement {
            path,
            prop,
            message,
        } => ::miette::miette!(
            "Cannot normalize prop '{}' of {}: {}\n\nHint: @chainedAs expects a JSON array of type names",
            prop,
            path.display(),
            message
        ),
        DocsError::Parse { path, message } => ::miette::miette!(
            "Failed to parse {}: {}",
            path.display(),
            message
        ),
        _ => ::miette::miette!("{}", err),
    }
}
