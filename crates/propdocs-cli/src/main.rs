//! propdocs CLI - builds component API reference JSON.
//!
//! Parses arguments, sets up logging and colors, then runs the build.

use clap::Parser;
use miette::Result;
use propdocs_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    commands::build_api_execute(args)
        .await
        .map_err(error::cli_error_to_miette)
}
