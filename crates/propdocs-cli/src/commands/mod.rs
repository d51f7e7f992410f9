//! Command implementations for the propdocs CLI.
//!
//! - [`build_api`] - Build the component API pages

pub mod build_api;
pub(crate) mod utils;

pub use build_api::execute as build_api_execute;
