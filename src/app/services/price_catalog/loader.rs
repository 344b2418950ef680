//! Price catalog loading from JSON market snapshots
//!
//! The source file maps market names to objects keyed by type id:
//! `{"jita": {"34": {"buy": {...}, "sell": {...}, ...}}}`.

use super::InMemoryPriceCatalog;
use super::LoadStats;
use crate::app::models::prices::Prices;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl InMemoryPriceCatalog {
    /// Load a price catalog from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to a `prices.json` file
    ///
    /// # Returns
    /// * `Result<(InMemoryPriceCatalog, LoadStats)>` - Catalog and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::Catalog` if the file doesn't exist
    /// * Returns `Error::Io` for file system access issues
    /// * Returns `Error::Serialization` for malformed JSON
    pub async fn load_from_file(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading price catalog from {}", path.display());

        if !path.exists() {
            return Err(Error::catalog(format!(
                "Price catalog file does not exist: {}",
                path.display()
            )));
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(format!("Failed to read price catalog {}", path.display()), e)
        })?;

        let (mut catalog, stats) = Self::from_json_str(&content)?;
        catalog.source_path = Some(path.to_path_buf());

        info!(
            "Price catalog loaded for markets {:?}: {}",
            catalog.market_names(),
            stats.summary()
        );
        Ok((catalog, stats))
    }

    /// Build a price catalog from JSON text
    pub fn from_json_str(content: &str) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let markets: HashMap<String, HashMap<i64, Prices>> = serde_json::from_str(content)
            .map_err(|e| Error::serialization("Invalid price catalog JSON", e))?;

        let mut catalog = Self::new();
        let mut stats = LoadStats::new();

        for (market, prices) in markets {
            let market = market.trim();
            stats.records_found += prices.len();

            if market.is_empty() {
                stats.invalid_skipped += prices.len();
                stats.errors.push("Prices listed under an empty market name".to_string());
                continue;
            }

            for (type_id, type_prices) in prices {
                if type_id <= 0 {
                    debug!("Skipping price for invalid type id {} in {}", type_id, market);
                    stats.invalid_skipped += 1;
                    continue;
                }
                catalog.insert(market, type_id, type_prices);
                stats.records_loaded += 1;
            }
        }

        stats.load_duration = start_time.elapsed();
        Ok((catalog, stats))
    }
}
