//! Command-line argument definitions for the appraisal engine
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_BUYBACK_MARKET;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the appraisal engine
///
/// Prices pasted game item text (inventories, contracts, fittings, scans, ...)
/// against market data and computes refining buyback valuations.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "appraisal-engine",
    version,
    about = "Price pasted game item text and compute buyback valuations",
    long_about = "Recognises inventory lists, contracts, fittings, kill reports, scans and \
                  other game-generated text without being told the format, merges the items \
                  it finds, prices them against a market snapshot and reduces them to base \
                  materials for a refining buyback valuation."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Appraise text from a file or standard input
    Appraise(AppraiseArgs),
    /// Show a type's static data, price and buyback eligibility
    Type(TypeArgs),
}

/// Output format for appraisal results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Coloured table for terminals
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the appraise command
#[derive(Debug, Clone, Parser)]
pub struct AppraiseArgs {
    /// File holding the text to appraise
    ///
    /// Reads standard input when omitted or given as "-".
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Market to price items in
    #[arg(short = 'm', long = "market", default_value = "jita")]
    pub market: String,

    /// Directory holding types.json and prices.json
    ///
    /// Defaults to the appraisal-engine directory under the user data directory.
    #[arg(short = 'd', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Market used to price buyback baskets
    #[arg(long = "buyback-market", value_name = "MARKET")]
    pub buyback_market: Option<String>,

    /// Refining efficiency in percent
    #[arg(long = "refine-rate", value_name = "PERCENT")]
    pub refine_rate: Option<f64>,

    /// Reprocessing efficiency in percent
    #[arg(long = "reprocess-rate", value_name = "PERCENT")]
    pub reprocess_rate: Option<f64>,

    /// Reject items that cannot be reduced to base materials
    #[arg(long = "reject-ineligible")]
    pub reject_ineligible: bool,

    /// Value blueprint copies by product less material cost instead of zero
    #[arg(long = "value-bpc")]
    pub value_blueprint_copies: bool,

    /// Show per-item buyback baskets in table output
    #[arg(long = "show-baskets")]
    pub show_baskets: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl AppraiseArgs {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// True when input should come from standard input
    pub fn reads_stdin(&self) -> bool {
        self.input
            .as_ref()
            .is_none_or(|path| path.as_os_str() == "-")
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        if self.market.trim().is_empty() {
            return Err(Error::configuration("--market must not be empty"));
        }

        for (flag, rate) in [
            ("--refine-rate", self.refine_rate),
            ("--reprocess-rate", self.reprocess_rate),
        ] {
            if let Some(rate) = rate {
                if !(rate > 0.0 && rate <= 100.0) {
                    return Err(Error::configuration(format!(
                        "{} must be in (0, 100], got {}",
                        flag, rate
                    )));
                }
            }
        }

        if let Some(path) = &self.input {
            if path.as_os_str() != "-" && !path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

/// Arguments for the type command
#[derive(Debug, Clone, Parser)]
pub struct TypeArgs {
    /// Type name, matched ignoring case
    pub name: String,

    /// Market to show the price in
    #[arg(short = 'm', long = "market", default_value = DEFAULT_BUYBACK_MARKET)]
    pub market: String,

    /// Directory holding types.json and prices.json
    #[arg(short = 'd', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TypeArgs {
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
