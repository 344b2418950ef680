//! Command implementations for the appraisal engine CLI
//!
//! Each command lives in its own module; `shared` holds logging setup,
//! catalog loading and output formatting.

pub mod appraise;
pub mod shared;
pub mod type_info;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the selected subcommand
///
/// - `appraise`: price text from a file or stdin
/// - `type`: inspect a single type
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Appraise(appraise_args)) => appraise::run_appraise(appraise_args).await,
        Some(Commands::Type(type_args)) => type_info::run_type(type_args).await,
        None => anyhow::bail!("No command given; run with --help for usage"),
    }
}
