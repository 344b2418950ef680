//! Configuration management and validation.
//!
//! Provides configuration structures for the pricing and buyback engines,
//! layered loading from a JSON file, and validation of rates and limits.

use crate::constants::{
    self, APP_DIR_NAME, BPC_PRODUCT_MARKET, CONFIG_FILENAME, DEFAULT_BUYBACK_MARKET,
    DEFAULT_MAX_DECOMPOSITION_DEPTH, DEFAULT_MAX_INPUT_BYTES, DEFAULT_PRODUCTION_EFFICIENCY,
    DEFAULT_REFINE_RATE, DEFAULT_REPROCESS_RATE, UNIVERSE_MARKET,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pricing engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Fraction of material cost actually spent when manufacturing from a copy
    pub production_efficiency: f64,

    /// Market replaced when pricing blueprint copy products
    pub bpc_fallback_from: String,

    /// Market used instead of `bpc_fallback_from`
    pub bpc_fallback_to: String,

    /// Report the computed net value of blueprint copies instead of zero
    pub value_blueprint_copies: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            production_efficiency: DEFAULT_PRODUCTION_EFFICIENCY,
            bpc_fallback_from: UNIVERSE_MARKET.to_string(),
            bpc_fallback_to: BPC_PRODUCT_MARKET.to_string(),
            value_blueprint_copies: false,
        }
    }
}

/// Buyback decomposition configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuybackConfig {
    /// Reference market for pricing material baskets
    pub market: String,

    /// Refining efficiency in percent
    pub refine_rate: f64,

    /// Reprocessing efficiency in percent
    pub reprocess_rate: f64,

    /// Base price adjustment in percent applied to basket items (0 = none)
    pub base_adjustment: f64,

    /// Per-type adjustment overrides in percent
    pub adjustments: HashMap<i64, f64>,

    /// Maximum materials graph depth followed before an item is treated as a leaf
    pub max_depth: usize,

    /// Reject items that cannot be fully decomposed into primitive materials
    pub reject_ineligible: bool,

    /// Groups taken as-is at 100% efficiency
    pub direct_group_ids: Vec<i64>,

    /// Groups refined rather than reprocessed
    pub refine_group_ids: Vec<i64>,

    /// Categories refined rather than reprocessed
    pub refine_category_ids: Vec<i64>,
}

impl Default for BuybackConfig {
    fn default() -> Self {
        Self {
            market: DEFAULT_BUYBACK_MARKET.to_string(),
            refine_rate: DEFAULT_REFINE_RATE,
            reprocess_rate: DEFAULT_REPROCESS_RATE,
            base_adjustment: 0.0,
            adjustments: HashMap::new(),
            max_depth: DEFAULT_MAX_DECOMPOSITION_DEPTH,
            reject_ineligible: false,
            direct_group_ids: constants::group_ids::DIRECT.to_vec(),
            refine_group_ids: constants::group_ids::REFINE.to_vec(),
            refine_category_ids: constants::category_ids::REFINE.to_vec(),
        }
    }
}

impl BuybackConfig {
    /// Adjustment table keyed by type id, with the base adjustment under
    /// [`constants::BASE_ADJUSTMENT_ID`]
    pub fn adjustment_table(&self) -> HashMap<i64, f64> {
        let mut table = self.adjustments.clone();
        if self.base_adjustment != 0.0 {
            table.insert(constants::BASE_ADJUSTMENT_ID, self.base_adjustment);
        }
        table
    }
}

/// Global configuration for appraisals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppraisalConfig {
    pub pricing: PricingConfig,
    pub buyback: BuybackConfig,

    /// Largest accepted raw input in bytes
    pub max_input_bytes: usize,
}

impl Default for AppraisalConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            buyback: BuybackConfig::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl AppraisalConfig {
    /// Set the refining efficiency
    pub fn with_refine_rate(mut self, rate: f64) -> Self {
        self.buyback.refine_rate = rate;
        self
    }

    /// Set the reprocessing efficiency
    pub fn with_reprocess_rate(mut self, rate: f64) -> Self {
        self.buyback.reprocess_rate = rate;
        self
    }

    /// Set the buyback reference market
    pub fn with_buyback_market(mut self, market: impl Into<String>) -> Self {
        self.buyback.market = market.into();
        self
    }

    /// Set the base adjustment for buyback baskets
    pub fn with_base_adjustment(mut self, adjustment: f64) -> Self {
        self.buyback.base_adjustment = adjustment;
        self
    }

    /// Add a per-type adjustment override
    pub fn with_adjustment(mut self, type_id: i64, adjustment: f64) -> Self {
        self.buyback.adjustments.insert(type_id, adjustment);
        self
    }

    /// Set the maximum decomposition depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.buyback.max_depth = depth;
        self
    }

    /// Reject items that are not buyback eligible
    pub fn with_reject_ineligible(mut self) -> Self {
        self.buyback.reject_ineligible = true;
        self
    }

    /// Report blueprint copy net value instead of zero
    pub fn with_blueprint_copy_valuation(mut self) -> Self {
        self.pricing.value_blueprint_copies = true;
        self
    }

    /// Set the maximum input size
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load defaults, then the config file if one exists, then validate
    ///
    /// An explicit path must exist; the default path is used only when present.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                info!("Using config file: {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => {
                    info!("Using config file: {}", path.display());
                    Self::from_file(&path)?
                }
                _ => {
                    info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check rates, limits and market names
    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("refine_rate", self.buyback.refine_rate),
            ("reprocess_rate", self.buyback.reprocess_rate),
        ] {
            if !(rate > 0.0 && rate <= 100.0) {
                return Err(Error::configuration(format!(
                    "{} must be in (0, 100], got {}",
                    name, rate
                )));
            }
        }

        if self.buyback.base_adjustment < 0.0 {
            return Err(Error::configuration(format!(
                "base_adjustment must not be negative, got {}",
                self.buyback.base_adjustment
            )));
        }

        if self.buyback.max_depth == 0 {
            return Err(Error::configuration("max_depth must be at least 1"));
        }

        if self.buyback.market.trim().is_empty() {
            return Err(Error::configuration("buyback market must not be empty"));
        }

        if !(self.pricing.production_efficiency > 0.0 && self.pricing.production_efficiency <= 1.0) {
            return Err(Error::configuration(format!(
                "production_efficiency must be in (0, 1], got {}",
                self.pricing.production_efficiency
            )));
        }

        if self.max_input_bytes == 0 {
            return Err(Error::configuration("max_input_bytes must be positive"));
        }

        Ok(())
    }
}
