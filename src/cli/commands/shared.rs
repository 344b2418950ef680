//! Shared components for CLI commands
//!
//! Logging setup, data directory discovery, catalog loading and number
//! formatting used by more than one command.

use crate::app::services::price_catalog::InMemoryPriceCatalog;
use crate::app::services::type_catalog::InMemoryTypeCatalog;
use crate::config::AppraisalConfig;
use crate::constants::{APP_DIR_NAME, PRICES_FILENAME, TYPES_FILENAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level derived from the command flags.
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("appraisal_engine={}", log_level)));

    // try_init: a second command in the same process keeps the first subscriber
    if quiet {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .with_timer(fmt::time::uptime()),
            )
            .try_init();
    }
}

/// Locate the directory holding the catalog files
///
/// An explicit path wins; otherwise the app directory under the user data
/// directory is used.
///
/// # Errors
///
/// Fails when no user data directory exists or the chosen directory is missing.
pub fn find_data_directory(explicit: Option<&Path>) -> Result<PathBuf> {
    let data_dir = match explicit {
        Some(path) => path.to_path_buf(),
        None => dirs::data_dir()
            .context("Could not determine user data directory")?
            .join(APP_DIR_NAME),
    };

    if !data_dir.is_dir() {
        anyhow::bail!(
            "Data directory not found: {}\nIt must contain {} and {}; pass --data-dir to use another location.",
            data_dir.display(),
            TYPES_FILENAME,
            PRICES_FILENAME
        );
    }

    debug!("Using data directory {}", data_dir.display());
    Ok(data_dir)
}

/// Load both catalogs from a data directory
pub async fn load_catalogs(data_dir: &Path) -> Result<(InMemoryTypeCatalog, InMemoryPriceCatalog)> {
    let types_path = data_dir.join(TYPES_FILENAME);
    let prices_path = data_dir.join(PRICES_FILENAME);

    let (types, type_stats) = InMemoryTypeCatalog::load_from_file(&types_path)
        .await
        .with_context(|| format!("Failed to load type catalog from {}", types_path.display()))?;
    let (prices, price_stats) = InMemoryPriceCatalog::load_from_file(&prices_path)
        .await
        .with_context(|| format!("Failed to load price catalog from {}", prices_path.display()))?;

    for (label, stats) in [("types", &type_stats), ("prices", &price_stats)] {
        info!("Catalog {}: {}", label, stats.summary());
        for error in stats.errors.iter().take(5) {
            warn!("Catalog {}: {}", label, error);
        }
    }

    Ok((types, prices))
}

/// Load configuration from an explicit file or the default location
pub fn load_config(config_file: Option<&Path>) -> Result<AppraisalConfig> {
    let config = AppraisalConfig::load_layered(config_file).context("Failed to load configuration")?;
    Ok(config)
}

/// Format an amount with thousands separators and two decimals
pub fn format_isk(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

/// Format a volume in cubic metres
pub fn format_volume(volume: f64) -> String {
    format!("{} m3", format_isk(volume))
}
