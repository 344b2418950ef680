//! Buyback decomposition service
//!
//! Values items by what they reduce to rather than what they sell for. Items
//! are broken down recursively through the type catalog's materials graph:
//!
//! - **Direct**: minerals, moon materials and refined ice products pass
//!   through at 100%
//! - **Refine**: asteroid ore and unrefined ice, at the refine rate
//! - **Reprocess**: anything else with materials, at the reprocess rate
//!
//! Recursion is bounded by a depth limit and a per-path cycle check. Both
//! stop at the current type and keep it as a leaf.
//!
//! # Example
//!
//! ```rust
//! use appraisal_engine::app::services::buyback::BuybackEngine;
//! use appraisal_engine::app::services::type_catalog::{Component, InMemoryTypeCatalog, TypeRecord};
//! use appraisal_engine::config::BuybackConfig;
//!
//! let mut scordite = TypeRecord::new(1228, "Scordite", 460, 25);
//! scordite.portion_size = 100;
//! scordite.materials = vec![Component::new(35, 400), Component::new(34, 600)];
//! let types = InMemoryTypeCatalog::from_records(vec![
//!     TypeRecord::new(34, "Tritanium", 18, 4),
//!     TypeRecord::new(35, "Pyerite", 18, 4),
//!     scordite.clone(),
//! ]);
//!
//! let config = BuybackConfig::default();
//! let engine = BuybackEngine::new(&types, &config);
//! let basket = engine.decompose(&scordite, 500);
//! assert_eq!(basket.get(35).map(|line| line.quantity), Some(1700));
//! assert_eq!(basket.get(34).map(|line| line.quantity), Some(2550));
//! ```

pub mod decompose;
pub mod eligibility;
pub mod engine;

#[cfg(test)]
pub mod tests;

pub use decompose::{Conversion, Decomposer, MaterialBasket, MaterialLine, material_quantity};
pub use eligibility::is_eligible;
pub use engine::{BuybackEngine, sort_by_quantity};
