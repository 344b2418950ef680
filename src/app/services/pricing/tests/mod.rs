//! Shared test utilities and fixtures for pricing tests

use crate::app::models::{AppraisalItem, CanonicalItem, ItemMeta};
use crate::app::services::price_catalog::InMemoryPriceCatalog;
use crate::app::services::price_catalog::tests::create_test_price_catalog;
use crate::app::services::pricing::{OreYieldTable, PricingEngine};
use crate::app::services::type_catalog::InMemoryTypeCatalog;
use crate::app::services::type_catalog::tests::create_test_type_catalog;
use crate::config::PricingConfig;

pub mod adjustment_tests;
pub mod ore_yield_tests;

/// Owned catalogs and tables a pricing engine borrows from
pub struct PricingFixture {
    pub types: InMemoryTypeCatalog,
    pub prices: InMemoryPriceCatalog,
    pub ore_yields: OreYieldTable,
    pub config: PricingConfig,
}

impl PricingFixture {
    pub fn new() -> Self {
        Self::with_config(PricingConfig::default())
    }

    pub fn with_config(config: PricingConfig) -> Self {
        Self {
            types: create_test_type_catalog(),
            prices: create_test_price_catalog(),
            ore_yields: OreYieldTable::standard(),
            config,
        }
    }

    pub fn engine(&self) -> PricingEngine<'_> {
        PricingEngine::new(&self.types, &self.prices, &self.ore_yields, &self.config)
    }
}

/// Create an unpriced item
pub fn create_test_item(name: &str, quantity: i64) -> AppraisalItem {
    AppraisalItem::from(CanonicalItem::new(name, quantity))
}

/// Create an unpriced blueprint copy item
pub fn create_test_bpc_item(name: &str, quantity: i64, runs: i64) -> AppraisalItem {
    let meta = ItemMeta {
        bpc: true,
        bpc_runs: runs,
        ..ItemMeta::default()
    };
    AppraisalItem::from(CanonicalItem::with_meta(name, quantity, meta))
}

/// Float comparison with a small absolute tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}
