use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for component API extraction.
///
/// `Io`, `Parse`, `MissingDescription` and `Refinement` are scoped to one
/// component file and fail the whole batch. `StyleResolution` and
/// `PageLookup` are resource-scoped: callers log them and fall back to an
/// empty value.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Walking a component or page directory failed.
    #[error("failed to discover sources in '{path}': {message}")]
    Discovery {
        /// Directory that could not be traversed.
        path: PathBuf,
        /// Underlying traversal failure.
        message: String,
    },

    /// Failed to read or access a source file.
    #[error("failed to read source '{path}': {error}")]
    Io {
        /// Path to the source file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Parsing the source file with OXC failed.
    #[error("failed to parse source '{path}': {message}")]
    Parse {
        /// Path to the source file.
        path: PathBuf,
        /// Aggregated parser error message.
        message: String,
    },

    /// A documented prop has no description at all.
    #[error("prop '{prop}' of '{path}' doesn't have a description")]
    MissingDescription {
        /// Path to the component source.
        path: PathBuf,
        /// Offending prop name.
        prop: String,
    },

    /// A refinement pass could not rewrite a descriptor.
    #[error("failed to refine prop '{prop}' of '{path}': {message}")]
    Refinement {
        /// Path to the component source.
        path: PathBuf,
        /// Prop whose descriptor was being refined.
        prop: String,
        /// What went wrong.
        message: String,
    },

    /// Companion style metadata is missing or unreadable.
    #[error("no style metadata at '{path}': {message}")]
    StyleResolution {
        /// Expected metadata file.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// A documentation page has no header block.
    #[error("page '{path}' has no header block")]
    PageLookup {
        /// Markdown file that was inspected.
        path: PathBuf,
    },

    /// An API record could not be rendered as JSON.
    #[error("failed to serialize API data: {error}")]
    Serialize {
        #[source]
        error: serde_json::Error,
    },
}

impl DocsError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }

    /// Helper to create a refinement error for one prop.
    pub fn refinement(path: PathBuf, prop: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Refinement {
            path,
            prop: prop.into(),
            message: message.into(),
        }
    }

    /// Whether the batch must fail when this error escapes a component.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::StyleResolution { .. } | Self::PageLookup { .. })
    }
}
