//! Blueprint copy valuation
//!
//! A copy is worth what its product sells for, less the cost of the materials
//! needed to build it, per run. Product value uses the best sell price in the
//! selected market (the "universe" pseudo-market is swapped for a trade hub
//! since it tends to contain outlier orders). Material cost takes the cheaper
//! of best sell and best buy for each component, discounted by the production
//! efficiency.

use crate::app::models::AppraisalItem;
use crate::app::models::prices::Prices;
use crate::app::services::price_catalog::PriceCatalog;
use crate::app::services::type_catalog::{Component, TypeCatalog, TypeRecord};
use crate::config::PricingConfig;
use crate::constants::{BLUEPRINT_SUFFIX, strategies};
use tracing::{debug, warn};

/// Breakdown of a blueprint copy valuation
#[derive(Debug, Clone, PartialEq)]
pub struct BlueprintCopyValuation {
    /// Sell value of everything one run produces
    pub product_value: Prices,
    /// Discounted material cost of one run
    pub material_cost: Prices,
    pub runs: i64,
}

impl BlueprintCopyValuation {
    /// Net value over every run
    pub fn net(&self) -> Prices {
        (self.product_value.clone() - &self.material_cost) * self.runs.max(1) as f64
    }
}

/// Name of the type a blueprint manufactures
pub fn product_name(blueprint_name: &str) -> &str {
    blueprint_name
        .strip_suffix(BLUEPRINT_SUFFIX)
        .unwrap_or(blueprint_name)
}

/// Value a blueprint copy item
///
/// Returns `None` when the product type cannot be resolved.
pub fn value_blueprint_copy(
    item: &AppraisalItem,
    market: &str,
    types: &dyn TypeCatalog,
    prices: &dyn PriceCatalog,
    config: &PricingConfig,
) -> Option<BlueprintCopyValuation> {
    let name = product_name(item.display_name());
    let Some(product) = types.resolve_by_name(name) else {
        warn!("Blueprint product is not a known type: {:?}", name);
        return None;
    };

    let product_market = if market.eq_ignore_ascii_case(&config.bpc_fallback_from) {
        config.bpc_fallback_to.as_str()
    } else {
        market
    };

    let mut product_value = Prices::with_strategy(strategies::BLUEPRINT_COPY);
    for output in products_of(product) {
        let Some(price) = prices.get_price(product_market, output.type_id) else {
            warn!(
                "No market data in {} for blueprint product {}",
                product_market, output.type_id
            );
            continue;
        };
        let unit = price.clone().set(price.sell.min);
        product_value = product_value + &(unit * output.quantity as f64);
    }

    let mut material_cost = Prices::with_strategy(strategies::BLUEPRINT_COPY);
    for component in &product.components {
        let Some(price) = prices.get_price(market, component.type_id) else {
            warn!(
                "No market data in {} for blueprint component {}",
                market, component.type_id
            );
            continue;
        };
        let unit = price.clone().set(price.sell.min.min(price.buy.max));
        material_cost = material_cost + &(unit * component.quantity as f64);
    }
    let material_cost = material_cost * config.production_efficiency;

    let valuation = BlueprintCopyValuation {
        product_value,
        material_cost,
        runs: item.meta.bpc_runs,
    };
    debug!(
        "Blueprint copy {}: product {}, materials {}, runs {}",
        item.display_name(),
        valuation.product_value.sell.min,
        valuation.material_cost.sell.min,
        valuation.runs
    );
    Some(valuation)
}

fn products_of(product: &TypeRecord) -> Vec<Component> {
    if product.blueprint_products.is_empty() {
        vec![Component::new(product.id, 1)]
    } else {
        product.blueprint_products.clone()
    }
}
