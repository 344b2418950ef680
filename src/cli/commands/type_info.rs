//! Type command implementation
//!
//! Shows one type's static data, its materials, its market price and whether
//! the buyback engine can reduce it to base materials.

use super::shared::{find_data_directory, format_isk, load_catalogs, load_config, setup_logging};
use crate::app::services::buyback::{BuybackEngine, Conversion};
use crate::app::services::price_catalog::PriceCatalog;
use crate::app::services::pricing::OreYieldTable;
use crate::app::services::type_catalog::{InMemoryTypeCatalog, TypeCatalog, TypeRecord};
use crate::cli::args::TypeArgs;
use crate::constants::COMPRESSED_PREFIX;
use crate::Error;
use anyhow::Result;
use colored::*;

const MAX_SUGGESTIONS: usize = 10;

/// Variants priced from a base ore, e.g. "Concentrated +5%, Dense +10%"
fn ore_variants(table: &OreYieldTable, name: &str) -> Option<String> {
    let base_name = name.strip_prefix(COMPRESSED_PREFIX).unwrap_or(name);
    let family = table
        .families()
        .iter()
        .find(|family| family.base_name.eq_ignore_ascii_case(base_name))?;

    let variants: Vec<String> = family
        .variants
        .iter()
        .map(|variant| format!("{} +{}%", variant.adjective, variant.bonus))
        .collect();
    Some(variants.join(", "))
}

/// Run the type command
pub async fn run_type(args: TypeArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false);

    let config = load_config(args.config_file.as_deref())?;
    let data_dir = find_data_directory(args.data_dir.as_deref())?;
    let (types, prices) = load_catalogs(&data_dir).await?;

    let record = match types.require_by_name(&args.name) {
        Ok(record) => record,
        Err(error @ Error::TypeNotFound { .. }) => {
            print_suggestions(&types, &args.name);
            return Err(error.into());
        }
        Err(error) => return Err(error.into()),
    };

    print_record(&types, record);

    println!();
    println!("{}", "Price".bright_white().bold());
    match prices.require_price(&args.market, record.id) {
        Ok(price) => {
            println!(
                "  {}: sell {}  buy {}",
                args.market.bright_cyan(),
                format_isk(price.sell.min).bright_green(),
                format_isk(price.buy.max).bright_green()
            );
        }
        Err(Error::PriceNotFound { market, .. }) => {
            println!(
                "  {}",
                format!("No price in market '{}'", market).bright_yellow()
            );
        }
        Err(error) => return Err(error.into()),
    }
    let ore_table = OreYieldTable::standard();
    if let Some(ore_match) = ore_table.lookup(&record.name) {
        println!("  Priced by ore yield: {}", ore_match.basis().bright_cyan());
    } else if let Some(variants) = ore_variants(&ore_table, &record.name) {
        println!("  Quality variants: {}", variants.bright_cyan());
    }

    println!();
    println!("{}", "Buyback".bright_white().bold());
    let engine = BuybackEngine::new(&types, &config.buyback);
    let conversion = match Conversion::for_type(record, &config.buyback) {
        Conversion::Direct => "taken as-is".to_string(),
        Conversion::Refine(rate) => format!("refined at {:.1}%", rate),
        Conversion::Reprocess(rate) => format!("reprocessed at {:.1}%", rate),
        Conversion::Leaf => "none, no materials".to_string(),
    };
    println!("  Conversion: {}", conversion.bright_cyan());
    if engine.is_eligible(record) {
        println!("  Eligible:   {}", "yes".bright_green().bold());
    } else {
        println!("  Eligible:   {}", "no".bright_red().bold());
    }

    Ok(())
}

fn print_record(types: &InMemoryTypeCatalog, record: &TypeRecord) {
    println!();
    println!(
        "{} {}",
        record.name.bright_green().bold(),
        format!("({})", record.id).bright_black()
    );
    println!("  Group:        {}", record.group_id);
    println!("  Category:     {}", record.category_id);
    println!("  Market group: {}", record.market_group_id);
    println!("  Volume:       {} m3", record.unit_volume());
    println!("  Portion size: {}", record.effective_portion_size());

    if record.materials.is_empty() {
        return;
    }
    println!();
    println!("{}", "Materials".bright_white().bold());
    for material in &record.materials {
        let name = types
            .resolve_by_id(material.type_id)
            .map(|material_record| material_record.name.as_str())
            .unwrap_or("unknown type");
        println!(
            "  {:>10} x {} {}",
            material.quantity,
            name,
            format!("({})", material.type_id).bright_black()
        );
    }
}

fn print_suggestions(types: &InMemoryTypeCatalog, name: &str) {
    let matches = types.search(name);
    if matches.is_empty() {
        return;
    }
    eprintln!("{}", "Did you mean:".bright_yellow());
    for record in matches.iter().take(MAX_SUGGESTIONS) {
        eprintln!("  {}", record.name);
    }
}
