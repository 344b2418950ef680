//! Recursive reduction of items to base materials
//!
//! Each step converts a quantity of one type into its materials list. The
//! conversion rule depends on the type: primitive materials pass through,
//! ores and ice are refined, everything else is reprocessed. Only the
//! efficiency of the step that produced a material applies to it; losses do
//! not compound across levels.
//!
//! A top-level type that is neither primitive nor decomposable yields no
//! materials, so it contributes nothing to a buyback.

use crate::app::models::Qualifier;
use crate::app::services::type_catalog::{TypeCatalog, TypeRecord};
use crate::config::BuybackConfig;
use crate::constants::DIRECT_EFFICIENCY;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// How a type is broken down
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// Already a primitive material
    Direct,
    /// Refined at the configured refine rate
    Refine(f64),
    /// Reprocessed at the configured reprocess rate
    Reprocess(f64),
    /// Cannot be broken down further
    Leaf,
}

impl Conversion {
    /// Choose the conversion rule for a type
    pub fn for_type(record: &TypeRecord, config: &BuybackConfig) -> Self {
        if config.direct_group_ids.contains(&record.group_id) {
            Self::Direct
        } else if !record.is_decomposable() {
            Self::Leaf
        } else if config.refine_category_ids.contains(&record.category_id)
            || config.refine_group_ids.contains(&record.group_id)
        {
            Self::Refine(config.refine_rate)
        } else {
            Self::Reprocess(config.reprocess_rate)
        }
    }
}

/// One material in a basket
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLine {
    pub type_id: i64,
    pub name: String,
    pub quantity: i64,
    /// Rule that produced the material
    pub qualifier: Qualifier,
    /// Efficiency of that rule in percent
    pub efficiency: f64,
    /// Set once paths with different rules or efficiencies were merged
    pub mixed: bool,
}

impl MaterialLine {
    /// Qualifier to report, `None` for a mixed line
    pub fn reported_qualifier(&self) -> Option<Qualifier> {
        (!self.mixed).then_some(self.qualifier)
    }

    /// Efficiency to report, zero for a mixed line
    pub fn reported_efficiency(&self) -> f64 {
        if self.mixed { 0.0 } else { self.efficiency }
    }
}

/// Materials keyed by type id
///
/// A type reached through several paths accumulates quantity. When the paths
/// disagree on rule or efficiency the line is marked mixed and reports no
/// qualifier; the first path's values stay on the line for inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialBasket {
    lines: BTreeMap<i64, MaterialLine>,
}

impl MaterialBasket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, summing with any existing line for the type
    pub fn add(&mut self, line: MaterialLine) {
        match self.lines.get_mut(&line.type_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
                if line.mixed
                    || existing.qualifier != line.qualifier
                    || existing.efficiency != line.efficiency
                {
                    existing.mixed = true;
                }
            }
            None => {
                self.lines.insert(line.type_id, line);
            }
        }
    }

    /// Fold another basket into this one
    pub fn merge(&mut self, other: &MaterialBasket) {
        for line in other.lines.values() {
            self.add(line.clone());
        }
    }

    pub fn get(&self, type_id: i64) -> Option<&MaterialLine> {
        self.lines.get(&type_id)
    }

    pub fn lines(&self) -> impl Iterator<Item = &MaterialLine> {
        self.lines.values()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of material quantities
    pub fn total_quantity(&self) -> i64 {
        self.lines.values().map(|line| line.quantity).sum()
    }
}

/// Quantity of one material produced by converting `quantity` units
///
/// `floor(floor(quantity / portion_size * material_quantity) * efficiency / 100)`
pub fn material_quantity(
    quantity: i64,
    portion_size: i64,
    material_quantity: i64,
    efficiency: f64,
) -> i64 {
    let portion_size = portion_size.max(1) as i128;
    let gross = (quantity as i128 * material_quantity as i128 / portion_size) as f64;
    (gross * efficiency / 100.0).floor() as i64
}

/// Recursive decomposition over a borrowed type catalog
pub struct Decomposer<'a> {
    types: &'a dyn TypeCatalog,
    config: &'a BuybackConfig,
}

impl<'a> Decomposer<'a> {
    pub fn new(types: &'a dyn TypeCatalog, config: &'a BuybackConfig) -> Self {
        Self { types, config }
    }

    /// Reduce `quantity` units of a type to base materials
    pub fn decompose(&self, record: &TypeRecord, quantity: i64) -> MaterialBasket {
        let mut basket = MaterialBasket::new();
        let mut path = Vec::new();
        self.decompose_into(record, quantity, None, 0, &mut path, &mut basket);
        basket
    }

    fn decompose_into(
        &self,
        record: &TypeRecord,
        quantity: i64,
        lineage: Option<(Qualifier, f64)>,
        depth: usize,
        path: &mut Vec<i64>,
        basket: &mut MaterialBasket,
    ) {
        if path.contains(&record.id) {
            warn!(
                "Materials cycle at {} ({}), treating as leaf",
                record.name, record.id
            );
            add_leaf(basket, record, quantity, lineage);
            return;
        }
        if depth >= self.config.max_depth {
            warn!(
                "Decomposition depth {} reached at {} ({}), treating as leaf",
                depth, record.name, record.id
            );
            add_leaf(basket, record, quantity, lineage);
            return;
        }

        let (qualifier, efficiency) = match Conversion::for_type(record, self.config) {
            Conversion::Direct => {
                let (qualifier, efficiency) = lineage.unwrap_or((Qualifier::Direct, DIRECT_EFFICIENCY));
                basket.add(MaterialLine {
                    type_id: record.id,
                    name: record.name.clone(),
                    quantity: quantity / record.effective_portion_size(),
                    qualifier,
                    efficiency,
                    mixed: false,
                });
                return;
            }
            Conversion::Leaf => {
                add_leaf(basket, record, quantity, lineage);
                return;
            }
            Conversion::Refine(rate) => (Qualifier::Refine, rate),
            Conversion::Reprocess(rate) => (Qualifier::Reprocess, rate),
        };

        path.push(record.id);
        for material in &record.materials {
            let Some(child) = self.types.resolve_by_id(material.type_id) else {
                warn!(
                    "Unknown material {} in {} ({}), skipping",
                    material.type_id, record.name, record.id
                );
                continue;
            };

            let child_quantity = material_quantity(
                quantity,
                record.effective_portion_size(),
                material.quantity,
                efficiency,
            );
            if child_quantity <= 0 {
                continue;
            }

            debug!(
                "{} x{} -> {} x{} ({} {}%)",
                record.name, quantity, child.name, child_quantity, qualifier, efficiency
            );
            self.decompose_into(
                child,
                child_quantity,
                Some((qualifier, efficiency)),
                depth + 1,
                path,
                basket,
            );
        }
        path.pop();
    }
}

/// Keep an undecomposable material under the rule that produced it
///
/// Without a producing rule the item was submitted as is and adds nothing.
fn add_leaf(
    basket: &mut MaterialBasket,
    record: &TypeRecord,
    quantity: i64,
    lineage: Option<(Qualifier, f64)>,
) {
    let Some((qualifier, efficiency)) = lineage else {
        debug!(
            "{} ({}) has no materials, no buyback contribution",
            record.name, record.id
        );
        return;
    };
    basket.add(MaterialLine {
        type_id: record.id,
        name: record.name.clone(),
        quantity,
        qualifier,
        efficiency,
        mixed: false,
    });
}
