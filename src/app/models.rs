//! Data models for appraisals
//!
//! This module contains the core data structures flowing through the appraisal
//! pipeline: canonical items produced by the normalizer, priced items produced by
//! the pricing engine, and the finished appraisal record. Field names in the JSON
//! representation are part of the persisted contract.

pub mod prices;

use crate::constants::COMPRESSED_PREFIX;
use chrono::{DateTime, Utc};
use prices::Prices;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Item Metadata
// =============================================================================

/// Format-specific details carried from the source parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMeta {
    #[serde(default, skip_serializing_if = "is_false")]
    pub fitted: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dropped: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub destroyed: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub player_name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub routed: bool,
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub volume: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distance: String,
    /// Blueprint copy flag
    #[serde(default)]
    pub bpc: bool,
    /// Runs remaining on a blueprint copy
    #[serde(rename = "bpcRuns", default, skip_serializing_if = "is_zero_i64")]
    pub bpc_runs: i64,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}

fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

// =============================================================================
// Canonical Items
// =============================================================================

/// One normalized (name, quantity) pair with its source metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalItem {
    pub name: String,
    pub quantity: i64,
    #[serde(default)]
    pub meta: ItemMeta,
}

impl CanonicalItem {
    /// Create an item without metadata
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            meta: ItemMeta::default(),
        }
    }

    /// Create an item with metadata
    pub fn with_meta(name: impl Into<String>, quantity: i64, meta: ItemMeta) -> Self {
        Self {
            name: name.into(),
            quantity,
            meta,
        }
    }
}

// =============================================================================
// Decomposition Qualifiers
// =============================================================================

/// Which decomposition rule produced a buyback material line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Qualifier {
    /// Already a primitive material, taken as-is
    Direct,
    /// Produced by refining ore or ice
    Refine,
    /// Produced by reprocessing any other item
    Reprocess,
}

impl Qualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "DIRECT",
            Self::Refine => "REFINE",
            Self::Reprocess => "REPROCESS",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Priced Items
// =============================================================================

/// A canonical item after type resolution and pricing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppraisalItem {
    pub name: String,
    #[serde(rename = "typeID", default)]
    pub type_id: i64,
    #[serde(rename = "typeName", default)]
    pub type_name: String,
    #[serde(rename = "typeVolume", default)]
    pub type_volume: f64,
    pub quantity: i64,
    #[serde(default)]
    pub prices: Prices,
    /// Percentage price adjustment, 0 meaning none
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub adjustment: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub rejected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Qualifier>,
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub efficiency: f64,
    /// Materials this item alone reduces to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyback: Option<ItemsAndTotals>,
    #[serde(default)]
    pub meta: ItemMeta,
}

impl From<CanonicalItem> for AppraisalItem {
    fn from(item: CanonicalItem) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            meta: item.meta,
            ..Self::default()
        }
    }
}

impl AppraisalItem {
    /// True once the type catalog resolved this item
    pub fn is_resolved(&self) -> bool {
        self.type_id != 0
    }

    /// Canonical type name when resolved, else the parsed name
    pub fn display_name(&self) -> &str {
        if self.type_name.is_empty() {
            &self.name
        } else {
            &self.type_name
        }
    }

    /// Multiplier derived from the percentage adjustment
    pub fn effective_adjustment(&self) -> f64 {
        if self.adjustment == 0.0 {
            1.0
        } else {
            self.adjustment / 100.0
        }
    }

    /// Value when selling into buy orders
    pub fn buy_total(&self) -> f64 {
        self.quantity as f64 * self.effective_adjustment() * self.prices.buy.max
    }

    /// Value when listing against sell orders
    pub fn sell_total(&self) -> f64 {
        self.quantity as f64 * self.effective_adjustment() * self.prices.sell.min
    }

    /// Total packaged volume
    pub fn total_volume(&self) -> f64 {
        self.quantity as f64 * self.type_volume
    }

    /// Unit price preferring the sell side
    pub fn single_representative_price(&self) -> f64 {
        if self.prices.sell.min != 0.0 {
            self.effective_adjustment() * self.prices.sell.min
        } else {
            self.effective_adjustment() * self.prices.buy.max
        }
    }

    pub fn representative_price(&self) -> f64 {
        self.quantity as f64 * self.single_representative_price()
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Summed buy value, sell value and volume of a basket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub buy: f64,
    pub sell: f64,
    pub volume: f64,
}

impl Totals {
    /// Accumulate one priced item
    pub fn add_item(&mut self, item: &AppraisalItem) {
        self.buy += item.buy_total();
        self.sell += item.sell_total();
        self.volume += item.total_volume();
    }
}

/// A priced basket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsAndTotals {
    pub totals: Totals,
    pub items: Vec<AppraisalItem>,
}

impl ItemsAndTotals {
    /// Sum of quantities across the basket
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

// =============================================================================
// Appraisal
// =============================================================================

/// The result of pricing one submitted text blob against one market
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    pub id: String,
    /// Creation time as Unix seconds
    pub created: i64,
    /// Name of the parser that explained most of the input
    pub kind: String,
    pub market_name: String,
    pub original: ItemsAndTotals,
    pub buyback: ItemsAndTotals,
    pub raw: String,
    /// Line number to trimmed text for every line no parser matched
    pub unparsed: BTreeMap<usize, String>,

    // Owner and visibility, set by the caller after creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Appraisal {
    pub fn created_time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.created, 0).unwrap_or_default()
    }

    /// True when every original item is a compressed variant
    pub fn only_compressed_ore(&self) -> bool {
        self.original
            .items
            .iter()
            .all(|item| item.name.starts_with(COMPRESSED_PREFIX))
    }

    /// Order original items by descending representative value
    pub fn sort_by_representative_price(&mut self) {
        self.original.items.sort_by(|a, b| {
            b.representative_price()
                .total_cmp(&a.representative_price())
        });
    }

    /// One-line description for logs
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Appraisal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = if self.id.is_empty() { "-" } else { &self.id };
        write!(
            f,
            "[Appraisal] id={}, market={}, kind={}, items={}, unparsed={}",
            id,
            self.market_name,
            self.kind,
            self.original.items.len(),
            self.unparsed.len()
        )?;
        if let Some(user_name) = &self.user_name {
            write!(f, ", user={}", user_name)?;
        }
        if self.private {
            write!(f, ", private")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(name: &str, quantity: i64, buy: f64, sell: f64) -> AppraisalItem {
        let mut item = AppraisalItem::from(CanonicalItem::new(name, quantity));
        item.type_id = 34;
        item.type_volume = 0.01;
        item.prices.buy.max = buy;
        item.prices.sell.min = sell;
        item
    }

    #[test]
    fn test_effective_adjustment_zero_means_none() {
        let mut item = priced("Tritanium", 10, 4.0, 5.0);
        assert_eq!(item.effective_adjustment(), 1.0);
        assert_eq!(item.sell_total(), 50.0);

        item.adjustment = 90.0;
        assert_eq!(item.effective_adjustment(), 0.9);
        assert_eq!(item.sell_total(), 45.0);
        assert_eq!(item.buy_total(), 36.0);
    }

    #[test]
    fn test_representative_price_falls_back_to_buy() {
        let item = priced("Tritanium", 10, 4.0, 0.0);
        assert_eq!(item.single_representative_price(), 4.0);
        assert_eq!(item.representative_price(), 40.0);
    }

    #[test]
    fn test_totals_accumulate() {
        let mut totals = Totals::default();
        totals.add_item(&priced("Tritanium", 100, 4.0, 5.0));
        totals.add_item(&priced("Pyerite", 10, 8.0, 10.0));
        assert_eq!(totals.buy, 480.0);
        assert_eq!(totals.sell, 600.0);
        assert!((totals.volume - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_item_json_contract() {
        let mut item = priced("Rifter Blueprint", 1, 1.0, 2.0);
        item.meta.bpc = true;
        item.meta.bpc_runs = 3;
        let json = serde_json::to_value(&item).unwrap();

        for field in ["name", "typeID", "typeName", "typeVolume", "quantity", "prices", "meta"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["meta"]["bpc"], true);
        assert_eq!(json["meta"]["bpcRuns"], 3);
        assert!(json.get("adjustment").is_none());
    }

    #[test]
    fn test_appraisal_summary_line() {
        let mut appraisal = Appraisal {
            market_name: "jita".to_string(),
            kind: "listing".to_string(),
            ..Appraisal::default()
        };
        appraisal.original.items.push(priced("Tritanium", 1, 1.0, 1.0));
        appraisal.unparsed.insert(2, "???".to_string());
        appraisal.private = true;

        assert_eq!(
            appraisal.summary(),
            "[Appraisal] id=-, market=jita, kind=listing, items=1, unparsed=1, private"
        );
    }

    #[test]
    fn test_only_compressed_ore() {
        let mut appraisal = Appraisal::default();
        appraisal.original.items.push(priced("Compressed Veldspar", 1, 1.0, 1.0));
        assert!(appraisal.only_compressed_ore());
        appraisal.original.items.push(priced("Veldspar", 1, 1.0, 1.0));
        assert!(!appraisal.only_compressed_ore());
    }

    #[test]
    fn test_sort_by_representative_price() {
        let mut appraisal = Appraisal::default();
        appraisal.original.items.push(priced("Cheap", 1, 1.0, 1.0));
        appraisal.original.items.push(priced("Dear", 1, 1.0, 100.0));
        appraisal.sort_by_representative_price();
        assert_eq!(appraisal.original.items[0].name, "Dear");
    }
}
