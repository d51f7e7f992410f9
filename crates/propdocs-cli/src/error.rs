//! Error handling for the propdocs CLI.
//!
//! `CliError` is what commands return. Extraction failures arrive as
//! [`propdocs::DocsError`]; configuration problems as [`ConfigError`]. At the
//! process boundary everything is rendered through [`cli_error_to_miette`].

mod miette;

use std::path::{Path, PathBuf};

use propdocs::DocsError;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Extraction error escaping the library outside a component build
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// One or more components failed; each failure has been logged
    #[error("{failed} of {total} components failed to build")]
    ComponentsFailed { failed: usize, total: usize },

    /// A worker task panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Task(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No such file or directory: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` points at nothing
    #[error("Config file not found: {}\n\nHint: Create a propdocs.toml file or drop --config", .0.display())]
    NotFound(PathBuf),

    /// A layer produced a value that does not fit `PropdocsConfig`
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Context helpers for results whose error converts into [`CliError`].
pub trait ResultExt<T> {
    /// Report a not-found I/O error as [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;

    /// Prefix the error message with `what`.
    fn context(self, what: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| match error.into() {
            CliError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn context(self, what: impl std::fmt::Display) -> Result<T> {
        self.map_err(|error| {
            let error: CliError = error.into();
            CliError::Custom(format!("{what}: {error}"))
        })
    }
}
