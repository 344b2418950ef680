//! Shared test utilities and fixtures for buyback tests

use crate::app::models::AppraisalItem;
use crate::app::services::buyback::BuybackEngine;
use crate::app::services::price_catalog::InMemoryPriceCatalog;
use crate::app::services::price_catalog::tests::create_test_price_catalog;
use crate::app::services::pricing::{OreYieldTable, PricingEngine};
use crate::app::services::type_catalog::tests::create_test_type_catalog;
use crate::app::services::type_catalog::{InMemoryTypeCatalog, TypeCatalog, TypeRecord};
use crate::config::{BuybackConfig, PricingConfig};


/// Owned catalogs and configuration the engines borrow from
pub struct BuybackFixture {
    pub types: InMemoryTypeCatalog,
    pub prices: InMemoryPriceCatalog,
    pub ore_yields: OreYieldTable,
    pub pricing_config: PricingConfig,
    pub config: BuybackConfig,
}

impl BuybackFixture {
    pub fn new() -> Self {
        Self::with_config(BuybackConfig::default())
    }

    pub fn with_config(config: BuybackConfig) -> Self {
        Self {
            types: create_test_type_catalog(),
            prices: create_test_price_catalog(),
            ore_yields: OreYieldTable::standard(),
            pricing_config: PricingConfig::default(),
            config,
        }
    }

    pub fn engine(&self) -> BuybackEngine<'_> {
        BuybackEngine::new(&self.types, &self.config)
    }

    pub fn pricing(&self) -> PricingEngine<'_> {
        PricingEngine::new(
            &self.types,
            &self.prices,
            &self.ore_yields,
            &self.pricing_config,
        )
    }

    /// Look up a fixture type by id
    pub fn record(&self, type_id: i64) -> &TypeRecord {
        self.types
            .resolve_by_id(type_id)
            .unwrap_or_else(|| panic!("fixture type {} missing", type_id))
    }

    /// Resolved and priced items, as the appraiser hands them over
    pub fn priced_items(&self, pairs: &[(&str, i64)]) -> Vec<AppraisalItem> {
        let mut items: Vec<AppraisalItem> = pairs
            .iter()
            .map(|(name, quantity)| AppraisalItem {
                name: name.to_string(),
                quantity: *quantity,
                ..AppraisalItem::default()
            })
            .collect();
        self.pricing()
            .price_items(&mut items, "jita", &Default::default());
        items
    }
}
