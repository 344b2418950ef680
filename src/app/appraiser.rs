//! Appraisal pipeline orchestration
//!
//! Ties the services together for one submission: classify the raw text,
//! normalize it into unique items, price the items in the selected market,
//! then reduce them to a priced buyback basket. Catalogs are held as a
//! swappable snapshot so a long-running host can refresh market data while
//! every appraisal sees one consistent view.

use crate::app::models::{Appraisal, AppraisalItem, ItemsAndTotals};
use crate::app::services::buyback::BuybackEngine;
use crate::app::services::normalizer::normalize;
use crate::app::services::parsers::{Input, ParseContext, multi_parser::classify};
use crate::app::services::price_catalog::PriceCatalog;
use crate::app::services::pricing::{Adjustments, OreYieldTable, PricingEngine};
use crate::app::services::type_catalog::TypeCatalog;
use crate::config::AppraisalConfig;
use crate::{Error, Result};
use chrono::Utc;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// One consistent pair of type and price catalogs
#[derive(Clone)]
pub struct CatalogSnapshot {
    pub types: Arc<dyn TypeCatalog>,
    pub prices: Arc<dyn PriceCatalog>,
}

impl CatalogSnapshot {
    pub fn new(types: Arc<dyn TypeCatalog>, prices: Arc<dyn PriceCatalog>) -> Self {
        Self { types, prices }
    }
}

/// Turns raw item text into priced appraisals
///
/// # Example
///
/// ```rust
/// use appraisal_engine::{AppraisalConfig, Appraiser};
/// use appraisal_engine::app::services::price_catalog::InMemoryPriceCatalog;
/// use appraisal_engine::app::services::type_catalog::{InMemoryTypeCatalog, TypeRecord};
/// use std::sync::Arc;
///
/// let types = InMemoryTypeCatalog::from_records(vec![TypeRecord::new(34, "Tritanium", 18, 4)]);
/// let appraiser = Appraiser::new(
///     AppraisalConfig::default(),
///     Arc::new(types),
///     Arc::new(InMemoryPriceCatalog::new()),
/// );
///
/// let appraisal = appraiser.appraise("jita", "Tritanium\tx10\ntritanium\tx5").unwrap();
/// assert_eq!(appraisal.kind, "listing");
/// assert_eq!(appraisal.original.items[0].quantity, 15);
/// ```
pub struct Appraiser {
    config: AppraisalConfig,
    ore_yields: OreYieldTable,
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl Appraiser {
    /// Create an appraiser over an initial catalog pair
    pub fn new(
        config: AppraisalConfig,
        types: Arc<dyn TypeCatalog>,
        prices: Arc<dyn PriceCatalog>,
    ) -> Self {
        Self {
            config,
            ore_yields: OreYieldTable::standard(),
            snapshot: RwLock::new(Arc::new(CatalogSnapshot::new(types, prices))),
        }
    }

    pub fn config(&self) -> &AppraisalConfig {
        &self.config
    }

    /// The catalog pair new appraisals will use
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        let guard = self
            .snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a new catalog pair
    ///
    /// Appraisals already running keep the snapshot they started with.
    pub fn replace_catalogs(&self, types: Arc<dyn TypeCatalog>, prices: Arc<dyn PriceCatalog>) {
        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(CatalogSnapshot::new(types, prices));
        info!("Replaced catalog snapshot");
    }

    /// Appraise raw text against a market
    ///
    /// # Arguments
    ///
    /// * `market` - Market to price the original items in
    /// * `raw` - Pasted text in any supported format
    ///
    /// # Returns
    ///
    /// A new appraisal with a fresh id and creation time
    ///
    /// # Errors
    ///
    /// * `Error::Configuration` - Empty or oversized input, or an empty market name
    /// * `Error::NoValidInput` - No parser recognised any line
    pub fn appraise(&self, market: &str, raw: &str) -> Result<Appraisal> {
        if raw.trim().is_empty() {
            return Err(Error::configuration("Input is empty"));
        }
        if raw.len() > self.config.max_input_bytes {
            return Err(Error::configuration(format!(
                "Input is {} bytes, limit is {}",
                raw.len(),
                self.config.max_input_bytes
            )));
        }
        if market.trim().is_empty() {
            return Err(Error::configuration("Market name is empty"));
        }

        let snapshot = self.snapshot();
        let types = snapshot.types.as_ref();
        let prices = snapshot.prices.as_ref();

        let input = Input::from_text(raw);
        let classification = classify(&input, &ParseContext::new(types))?;
        let mut items: Vec<AppraisalItem> = normalize(&classification.result)
            .into_iter()
            .map(AppraisalItem::from)
            .collect();
        debug!(
            "Normalized {} lines into {} items",
            input.len(),
            items.len()
        );

        let pricing = PricingEngine::new(types, prices, &self.ore_yields, &self.config.pricing);
        let buyback_engine = BuybackEngine::new(types, &self.config.buyback);

        if self.config.buyback.reject_ineligible {
            for item in items.iter_mut() {
                pricing.resolve_item(item);
            }
            let rejected = buyback_engine.reject_ineligible(&mut items);
            if rejected > 0 {
                info!("Rejected {} items not eligible for buyback", rejected);
            }
        }

        let totals = pricing.price_items(&mut items, market, &Adjustments::new());
        let buyback = buyback_engine.calculate(&mut items, &pricing);

        let appraisal = Appraisal {
            id: Uuid::new_v4().to_string(),
            created: Utc::now().timestamp(),
            kind: classification.kind,
            market_name: market.to_string(),
            original: ItemsAndTotals { totals, items },
            buyback,
            raw: raw.to_string(),
            unparsed: classification.unparsed,
            ..Appraisal::default()
        };

        info!("{}", appraisal.summary());
        Ok(appraisal)
    }
}
