//! Command-line interface definition for propdocs.
//!
//! `propdocs [OPTIONS] <OUTPUT_DIRECTORY> <COMPONENT_DIRECTORIES>...`
//! discovers every component under the given directories and writes one
//! API record and one translation map per component.

mod validation;

use std::path::PathBuf;

use clap::Parser;
use regex::Regex;

pub use validation::{parse_grep, parse_max_parallel};

/// propdocs - component API reference extractor
#[derive(Parser, Debug)]
#[command(
    name = "propdocs",
    version,
    about = "Builds component API reference JSON from component sources",
    long_about = "propdocs reads propTypes, defaultProps, JSDoc comments and style sheets\n\
                  from UI component sources and writes one JSON API record plus one\n\
                  translation map per component."
)]
pub struct Cli {
    /// Directory the JSON is written to
    ///
    /// `components/<Name>.json` and `translations/<Name>/<Name>.json` are
    /// created below it.
    #[arg(value_name = "OUTPUT_DIRECTORY")]
    pub output_directory: PathBuf,

    /// Directories to component sources
    #[arg(required = true, value_name = "COMPONENT_DIRECTORIES")]
    pub component_directories: Vec<PathBuf>,

    /// Only build components whose path matches the pattern
    ///
    /// The pattern is a regular expression tested against the full path of
    /// each discovered component file.
    #[arg(long, value_name = "PATTERN", value_parser = parse_grep)]
    pub grep: Option<Regex>,

    /// Repository root, used for relative filenames in the API records
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory holding the documentation pages (`*.md`)
    #[arg(long, value_name = "DIR")]
    pub pages_dir: Option<PathBuf>,

    /// Directory holding companion style metadata (`<kebab-name>.json`)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Maximum number of components built concurrently
    #[arg(long, value_name = "N", value_parser = parse_max_parallel)]
    pub max_parallel: Option<usize>,

    /// Path to a propdocs.toml configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Shows every extraction step, including swallowed style and page
    /// lookups.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
