use appraisal_engine::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(appraisal_engine::Error::processing_interrupted(
                    "Appraisal interrupted by user",
                )
                .into())
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Appraisal Engine - price pasted game item text");
    println!("==============================================");
    println!();
    println!("Recognises inventory lists, contracts, fittings, kill reports, scans and");
    println!("other copied text, prices every item and computes a buyback valuation.");
    println!();
    println!("USAGE:");
    println!("    appraisal-engine <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    appraise    Appraise text from a file or standard input");
    println!("    type        Show a type's data, price and buyback eligibility");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Appraise a copied inventory in Jita:");
    println!("    appraisal-engine appraise --input cargo.txt");
    println!();
    println!("    # Pipe text in and get JSON with ineligible items rejected:");
    println!("    pbpaste | appraisal-engine appraise --format json --reject-ineligible");
    println!();
    println!("    # Inspect a type:");
    println!("    appraisal-engine type \"Scordite\"");
    println!();
    println!("Catalogs are read from types.json and prices.json in the user data");
    println!("directory (appraisal-engine/) unless --data-dir is given.");
}
