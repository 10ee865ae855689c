//! Command implementations for the oil bulletin CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented
//! in its own module.

pub mod countries;
pub mod extract;
pub mod fetch;
pub mod shared;

pub use shared::PipelineStats;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `fetch`: download the latest workbook and write a report
/// - `extract`: run extraction on a local workbook file
/// - `countries`: list the country code registry
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<PipelineStats> {
    match args.get_command() {
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args, cancellation_token).await,
        Commands::Extract(extract_args) => extract::run_extract(extract_args).await,
        Commands::Countries(countries_args) => countries::run_countries(countries_args),
    }
}
