//! Price catalog service for per-market price lookups
//!
//! Holds aggregate buy/sell statistics keyed by market name and type id.
//! Market names are matched case-insensitively.

use crate::app::models::prices::Prices;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

pub mod loader;

#[cfg(test)]
pub mod tests;

pub use crate::app::services::type_catalog::metadata::{CatalogMetadata, LoadStats};

/// Read-only lookup of market prices
pub trait PriceCatalog: Send + Sync {
    /// Price statistics for a type in a market
    fn get_price(&self, market: &str, type_id: i64) -> Option<&Prices>;

    /// Price statistics for a type in a market, failing with `Error::PriceNotFound`
    fn require_price(&self, market: &str, type_id: i64) -> Result<&Prices> {
        self.get_price(market, type_id)
            .ok_or_else(|| Error::price_not_found(market, type_id))
    }
}

/// Price catalog held entirely in memory
#[derive(Debug, Clone)]
pub struct InMemoryPriceCatalog {
    /// Lowercased market name to per-type prices
    pub(crate) markets: HashMap<String, HashMap<i64, Prices>>,

    /// File the catalog was loaded from, if any
    pub(crate) source_path: Option<PathBuf>,

    /// Timestamp when the catalog was built
    pub(crate) load_time: Instant,
}

impl Default for InMemoryPriceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPriceCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            markets: HashMap::new(),
            source_path: None,
            load_time: Instant::now(),
        }
    }

    /// Set the price of a type in a market, replacing any previous entry
    pub fn insert(&mut self, market: &str, type_id: i64, prices: Prices) {
        self.markets
            .entry(market.to_lowercase())
            .or_default()
            .insert(type_id, prices);
    }

    /// Names of the markets with price data, sorted
    pub fn market_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.markets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Check if a market has any price data
    pub fn has_market(&self, market: &str) -> bool {
        self.markets.contains_key(&market.to_lowercase())
    }

    /// Total number of (market, type) entries
    pub fn price_count(&self) -> usize {
        self.markets.values().map(HashMap::len).sum()
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source_path: self.source_path.clone(),
            record_count: self.price_count(),
            load_time: self.load_time,
        }
    }
}

impl PriceCatalog for InMemoryPriceCatalog {
    fn get_price(&self, market: &str, type_id: i64) -> Option<&Prices> {
        self.markets
            .get(&market.to_lowercase())
            .and_then(|prices| prices.get(&type_id))
    }
}
