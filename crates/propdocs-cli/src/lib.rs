//! propdocs CLI - builds component API reference JSON from component sources.
//!
//! This crate wraps the `propdocs` library in a batch command: discover
//! component files, build every record concurrently, and write the JSON
//! output tree.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions
//! - [`config`] - Layered configuration (`propdocs.toml`, `PROPDOCS_*`, flags)
//! - [`commands`] - The build driver
//! - [`error`] - Error types and miette diagnostics
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal messages and progress
//!
//! # Example
//!
//! ```rust
//! use propdocs_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, true, true);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
