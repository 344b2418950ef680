//! Buyback basket construction and pricing

use crate::app::models::{AppraisalItem, ItemsAndTotals};
use crate::app::services::pricing::{Adjustments, PricingEngine};
use crate::app::services::type_catalog::{TypeCatalog, TypeRecord};
use crate::config::BuybackConfig;
use std::cmp::Ordering;
use tracing::{debug, info};

use super::decompose::{Decomposer, MaterialBasket};
use super::eligibility::is_eligible;

/// Computes buyback valuations for priced appraisal items
///
/// Every accepted item is reduced to base materials on its own, giving it an
/// isolated basket, and the per-item baskets are merged by type id into one
/// global basket. All baskets are priced against the configured buyback
/// market with the configured adjustments.
pub struct BuybackEngine<'a> {
    types: &'a dyn TypeCatalog,
    config: &'a BuybackConfig,
    adjustments: Adjustments,
}

impl<'a> BuybackEngine<'a> {
    pub fn new(types: &'a dyn TypeCatalog, config: &'a BuybackConfig) -> Self {
        Self {
            types,
            config,
            adjustments: config.adjustment_table(),
        }
    }

    /// Whether a type reduces entirely to primitive materials
    pub fn is_eligible(&self, record: &TypeRecord) -> bool {
        is_eligible(self.types, self.config, record)
    }

    /// Mark resolved items that cannot be bought back as rejected
    ///
    /// # Returns
    ///
    /// Number of rejected items
    pub fn reject_ineligible(&self, items: &mut [AppraisalItem]) -> usize {
        let mut rejected = 0;
        for item in items.iter_mut().filter(|item| item.is_resolved()) {
            if let Some(record) = self.types.resolve_by_id(item.type_id) {
                item.rejected = !self.is_eligible(record);
                if item.rejected {
                    rejected += 1;
                }
            }
        }
        rejected
    }

    /// Decompose one type into its material basket
    pub fn decompose(&self, record: &TypeRecord, quantity: i64) -> MaterialBasket {
        Decomposer::new(self.types, self.config).decompose(record, quantity)
    }

    /// Build and price the buyback baskets for a set of priced items
    ///
    /// Each accepted item gets its own priced basket in `item.buyback`.
    /// Rejected and unresolved items are skipped.
    ///
    /// # Arguments
    ///
    /// * `items` - Items already resolved by the pricing engine
    /// * `pricing` - Engine used to price material baskets
    ///
    /// # Returns
    ///
    /// The merged global basket, priced and sorted
    pub fn calculate(
        &self,
        items: &mut [AppraisalItem],
        pricing: &PricingEngine<'_>,
    ) -> ItemsAndTotals {
        let decomposer = Decomposer::new(self.types, self.config);
        let mut global = MaterialBasket::new();

        for item in items.iter_mut() {
            if item.rejected || !item.is_resolved() {
                continue;
            }
            let Some(record) = self.types.resolve_by_id(item.type_id) else {
                continue;
            };

            let basket = decomposer.decompose(record, item.quantity);
            debug!(
                "{} x{} reduces to {} materials",
                record.name,
                item.quantity,
                basket.len()
            );
            global.merge(&basket);
            item.buyback = Some(self.price_basket(&basket, pricing));
        }

        let buyback = self.price_basket(&global, pricing);
        info!(
            "Buyback basket: {} materials, sell {:.2}, buy {:.2}",
            buyback.items.len(),
            buyback.totals.sell,
            buyback.totals.buy
        );
        buyback
    }

    /// Price a basket against the buyback market
    pub fn price_basket(&self, basket: &MaterialBasket, pricing: &PricingEngine<'_>) -> ItemsAndTotals {
        let mut items: Vec<AppraisalItem> = basket
            .lines()
            .map(|line| AppraisalItem {
                name: line.name.clone(),
                type_id: line.type_id,
                quantity: line.quantity,
                qualifier: line.reported_qualifier(),
                efficiency: line.reported_efficiency(),
                ..AppraisalItem::default()
            })
            .collect();
        sort_by_quantity(&mut items);

        let totals = pricing.price_items(&mut items, &self.config.market, &self.adjustments);
        ItemsAndTotals { totals, items }
    }
}

/// Descending quantity, then name
pub fn sort_by_quantity(items: &mut [AppraisalItem]) {
    items.sort_by(|a, b| match b.quantity.cmp(&a.quantity) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
}
