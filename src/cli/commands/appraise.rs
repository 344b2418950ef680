//! Appraise command implementation
//!
//! Reads text from a file or stdin, appraises it against the loaded catalogs
//! and prints either a coloured table or the appraisal as JSON.

use super::shared::{find_data_directory, format_isk, format_volume, load_catalogs, load_config, setup_logging};
use crate::app::models::{Appraisal, AppraisalItem, ItemsAndTotals};
use crate::cli::args::{AppraiseArgs, OutputFormat};
use crate::config::AppraisalConfig;
use crate::Appraiser;
use anyhow::{Context, Result};
use colored::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Run the appraise command
pub async fn run_appraise(args: AppraiseArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet);
    args.validate()?;

    let start_time = Instant::now();
    let config = apply_overrides(load_config(args.config_file.as_deref())?, &args);
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    let data_dir = find_data_directory(args.data_dir.as_deref())?;
    let (types, prices) = load_catalogs(&data_dir).await?;
    let raw = read_input(&args).await?;

    let appraiser = Appraiser::new(config, Arc::new(types), Arc::new(prices));
    let appraisal = appraiser.appraise(&args.market, &raw)?;
    info!("Appraisal finished in {:.2}s", start_time.elapsed().as_secs_f64());

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&appraisal).context("Failed to encode appraisal")?;
            println!("{}", json);
        }
        OutputFormat::Table => print_appraisal(&appraisal, args.show_baskets),
    }

    Ok(())
}

/// Fold command-line overrides into the loaded configuration
pub fn apply_overrides(mut config: AppraisalConfig, args: &AppraiseArgs) -> AppraisalConfig {
    if let Some(market) = &args.buyback_market {
        config = config.with_buyback_market(market.as_str());
    }
    if let Some(rate) = args.refine_rate {
        config = config.with_refine_rate(rate);
    }
    if let Some(rate) = args.reprocess_rate {
        config = config.with_reprocess_rate(rate);
    }
    if args.reject_ineligible {
        config = config.with_reject_ineligible();
    }
    if args.value_blueprint_copies {
        config = config.with_blueprint_copy_valuation();
    }
    config
}

async fn read_input(args: &AppraiseArgs) -> Result<String> {
    let mut raw = String::new();
    match &args.input {
        Some(path) if !args.reads_stdin() => {
            raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
        }
        _ => {
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read standard input")?;
        }
    }
    debug!("Read {} bytes of input", raw.len());
    Ok(raw)
}

fn print_appraisal(appraisal: &Appraisal, show_baskets: bool) {
    println!();
    println!(
        "{} {}",
        "Appraisal".bright_green().bold(),
        appraisal.id.bright_black()
    );
    println!(
        "  Market: {}   Format: {}   Created: {}",
        appraisal.market_name.bright_cyan(),
        appraisal.kind.bright_cyan(),
        appraisal.created_time().format("%Y-%m-%d %H:%M:%S UTC")
    );

    println!();
    println!("{}", "Items".bright_white().bold());
    print_items(&appraisal.original);

    if !appraisal.buyback.items.is_empty() {
        println!();
        println!("{}", "Buyback materials".bright_white().bold());
        print_items(&appraisal.buyback);
    }

    if show_baskets {
        for item in &appraisal.original.items {
            if let Some(basket) = &item.buyback {
                println!();
                println!(
                    "{} {} x{}",
                    "Basket:".bright_white().bold(),
                    item.display_name(),
                    item.quantity
                );
                print_items(basket);
            }
        }
    }

    if !appraisal.unparsed.is_empty() {
        println!();
        println!(
            "{} {} unparsed lines",
            "Warning:".bright_yellow().bold(),
            appraisal.unparsed.len()
        );
        for (line_number, text) in &appraisal.unparsed {
            println!("  {:>4}: {}", line_number, text.bright_black());
        }
    }
    println!();
}

fn print_items(basket: &ItemsAndTotals) {
    println!(
        "  {:<40} {:>12} {:>18} {:>18} {}",
        "Name", "Quantity", "Sell", "Buy", "Notes"
    );
    for item in &basket.items {
        print_item(item);
    }
    println!(
        "  {:<40} {:>12} {:>18} {:>18} {}",
        "Total".bright_white().bold(),
        basket.total_quantity(),
        format_isk(basket.totals.sell).bright_green(),
        format_isk(basket.totals.buy).bright_green(),
        format_volume(basket.totals.volume).bright_black()
    );
}

fn print_item(item: &AppraisalItem) {
    let mut notes = Vec::new();
    if item.rejected {
        notes.push("rejected".bright_red().to_string());
    }
    if !item.is_resolved() {
        notes.push("unknown type".bright_yellow().to_string());
    }
    if let Some(qualifier) = item.qualifier {
        notes.push(format!("{} {:.0}%", qualifier, item.efficiency));
    }
    if !item.prices.basis.is_empty() {
        notes.push(item.prices.basis.clone());
    }
    if item.adjustment != 0.0 {
        notes.push(format!("adj {:.0}%", item.adjustment));
    }
    if item.meta.bpc {
        notes.push(format!("BPC runs {}", item.meta.bpc_runs));
    }

    println!(
        "  {:<40} {:>12} {:>18} {:>18} {}",
        item.display_name(),
        item.quantity,
        format_isk(item.sell_total()),
        format_isk(item.buy_total()),
        notes.join(", ").bright_black()
    );
}
