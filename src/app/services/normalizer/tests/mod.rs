//! Shared test utilities and fixtures for normalizer tests

use crate::app::models::CanonicalItem;

pub mod flatten_tests;

/// Build canonical items from (name, quantity) pairs
pub fn create_test_items(pairs: &[(&str, i64)]) -> Vec<CanonicalItem> {
    pairs
        .iter()
        .map(|(name, quantity)| CanonicalItem::new(*name, *quantity))
        .collect()
}

/// Total quantity across items
pub fn total_quantity(items: &[CanonicalItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}
