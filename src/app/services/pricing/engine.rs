//! Pricing engine: type resolution, price strategy selection and totals

use crate::app::models::prices::Prices;
use crate::app::models::{AppraisalItem, Totals};
use crate::app::services::price_catalog::PriceCatalog;
use crate::app::services::type_catalog::{TypeCatalog, TypeRecord};
use crate::config::PricingConfig;
use crate::constants::strategies;
use tracing::{debug, warn};

use super::adjustments::{Adjustments, adjustment_for};
use super::blueprint::value_blueprint_copy;
use super::ore_yield::OreYieldTable;

/// Prices appraisal items against one catalog snapshot
///
/// The engine borrows everything it needs, so one is built per appraisal and
/// dropped with it.
///
/// # Example
///
/// ```rust
/// use appraisal_engine::app::models::{AppraisalItem, CanonicalItem};
/// use appraisal_engine::app::services::price_catalog::InMemoryPriceCatalog;
/// use appraisal_engine::app::services::pricing::{OreYieldTable, PricingEngine};
/// use appraisal_engine::app::services::type_catalog::{InMemoryTypeCatalog, TypeRecord};
/// use appraisal_engine::config::PricingConfig;
/// use std::collections::HashMap;
///
/// let types = InMemoryTypeCatalog::from_records(vec![TypeRecord::new(34, "Tritanium", 18, 4)]);
/// let prices = InMemoryPriceCatalog::new();
/// let ore_yields = OreYieldTable::standard();
/// let config = PricingConfig::default();
/// let engine = PricingEngine::new(&types, &prices, &ore_yields, &config);
///
/// let mut items = vec![AppraisalItem::from(CanonicalItem::new("tritanium", 10))];
/// let totals = engine.price_items(&mut items, "jita", &HashMap::new());
/// assert_eq!(items[0].type_id, 34);
/// assert_eq!(totals.sell, 0.0);
/// ```
pub struct PricingEngine<'a> {
    types: &'a dyn TypeCatalog,
    prices: &'a dyn PriceCatalog,
    ore_yields: &'a OreYieldTable,
    config: &'a PricingConfig,
}

impl<'a> PricingEngine<'a> {
    /// Create an engine over borrowed catalogs and static tables
    pub fn new(
        types: &'a dyn TypeCatalog,
        prices: &'a dyn PriceCatalog,
        ore_yields: &'a OreYieldTable,
        config: &'a PricingConfig,
    ) -> Self {
        Self {
            types,
            prices,
            ore_yields,
            config,
        }
    }

    /// Fill in type id, canonical name and unit volume
    ///
    /// Already resolved items are looked up by id. Returns `None` and leaves
    /// the item untouched when the name is not a known type.
    pub fn resolve_item(&self, item: &mut AppraisalItem) -> Option<&'a TypeRecord> {
        let record = if item.is_resolved() {
            self.types.resolve_by_id(item.type_id)
        } else {
            self.types.resolve_by_name(&item.name)
        }?;

        item.type_id = record.id;
        item.type_name = record.name.clone();
        item.type_volume = record.unit_volume();
        Some(record)
    }

    /// Price statistics for one resolved item
    ///
    /// Blueprint copies are valued by their product when enabled and zeroed
    /// otherwise. Everything else goes through [`Self::adjusted_prices`].
    pub fn prices_for_item(&self, market: &str, item: &AppraisalItem) -> Prices {
        if item.meta.bpc {
            let valuation =
                value_blueprint_copy(item, market, self.types, self.prices, self.config);
            return match valuation {
                Some(valuation) if self.config.value_blueprint_copies => valuation.net(),
                Some(_) => Prices::with_strategy(strategies::BLUEPRINT_COPY),
                None => Prices::default(),
            };
        }

        self.adjusted_prices(market, item)
    }

    /// Market price, scaled from the base ore for ore quality variants
    pub fn adjusted_prices(&self, market: &str, item: &AppraisalItem) -> Prices {
        if let Some(ore_match) = self.ore_yields.lookup(&item.name) {
            if let Some(base) = self.types.resolve_by_name(&ore_match.base_type_name) {
                let base_prices = match self.prices.get_price(market, base.id) {
                    Some(prices) => prices.clone(),
                    None => {
                        warn!("No price for {} in market {}", base.name, market);
                        Prices::default()
                    }
                };
                let mut prices = base_prices * ore_match.multiplier();
                prices.strategy = strategies::ORE_YIELD.to_string();
                prices.basis = ore_match.basis();
                debug!("Priced {} from {}", item.name, prices.basis);
                return prices;
            }
        }

        match self.prices.get_price(market, item.type_id) {
            Some(prices) => {
                let mut prices = prices.clone();
                if prices.strategy.is_empty() {
                    prices.strategy = strategies::MARKET.to_string();
                }
                prices
            }
            None => {
                warn!(
                    "No price for {} ({}) in market {}",
                    item.display_name(),
                    item.type_id,
                    market
                );
                Prices::default()
            }
        }
    }

    /// Resolve, price and adjust items in place and return their totals
    ///
    /// Unresolvable and rejected items keep zero prices and are left out of
    /// the totals.
    ///
    /// # Arguments
    ///
    /// * `items` - Items to price
    /// * `market` - Market name to price against
    /// * `adjustments` - Percentage adjustments; empty for no adjustment
    pub fn price_items(
        &self,
        items: &mut [AppraisalItem],
        market: &str,
        adjustments: &Adjustments,
    ) -> Totals {
        let mut totals = Totals::default();

        for item in items.iter_mut() {
            let Some(record) = self.resolve_item(item) else {
                warn!("Parsed out name that isn't a type: {:?}", item.name);
                continue;
            };

            if item.rejected {
                item.prices = Prices::default();
                debug!("Skipping rejected item {}", record.name);
                continue;
            }

            item.prices = self.prices_for_item(market, item);
            item.adjustment = adjustment_for(record.id, adjustments);
            totals.add_item(item);
        }

        totals
    }
}
