//! Pricing service for appraisal items
//!
//! Resolves parsed item names against the type catalog and attaches market
//! price statistics, choosing one of three strategies per item:
//!
//! - [`blueprint`] - blueprint copies, valued by product less material cost
//! - [`ore_yield`] - ore quality variants, priced from the base ore
//! - direct lookup in the selected market for everything else
//!
//! Percentage adjustments from [`adjustments`] are applied on top, and
//! priced items are summed into basket totals.

pub mod adjustments;
pub mod blueprint;
pub mod engine;
pub mod ore_yield;

#[cfg(test)]
pub mod tests;

pub use adjustments::{Adjustments, adjustment_for};
pub use blueprint::{BlueprintCopyValuation, value_blueprint_copy};
pub use engine::PricingEngine;
pub use ore_yield::{OreFamily, OreVariant, OreYieldMatch, OreYieldTable};
