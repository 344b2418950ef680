//! Buyback eligibility checks

use crate::app::services::type_catalog::{TypeCatalog, TypeRecord};
use crate::config::BuybackConfig;
use tracing::debug;

/// True when a type reduces entirely to primitive materials
///
/// A primitive type is eligible. Any other type is eligible when it has a
/// materials list and every material resolves and is itself eligible.
/// Unknown materials, cycles and paths deeper than the configured limit make
/// a type ineligible.
pub fn is_eligible(types: &dyn TypeCatalog, config: &BuybackConfig, record: &TypeRecord) -> bool {
    let mut path = Vec::new();
    check(types, config, record, 0, &mut path)
}

fn check(
    types: &dyn TypeCatalog,
    config: &BuybackConfig,
    record: &TypeRecord,
    depth: usize,
    path: &mut Vec<i64>,
) -> bool {
    if config.direct_group_ids.contains(&record.group_id) {
        return true;
    }
    if !record.is_decomposable() || depth >= config.max_depth || path.contains(&record.id) {
        debug!("{} ({}) is not buyback eligible", record.name, record.id);
        return false;
    }

    path.push(record.id);
    let eligible = record.materials.iter().all(|material| {
        types
            .resolve_by_id(material.type_id)
            .is_some_and(|child| check(types, config, child, depth + 1, path))
    });
    path.pop();
    eligible
}
