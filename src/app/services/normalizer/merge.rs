//! Case-insensitive item de-duplication

use crate::app::models::CanonicalItem;
use std::collections::HashMap;
use tracing::debug;

/// Merge items whose trimmed names match ignoring case
///
/// One item is kept per name, in first-seen order, with the first-seen
/// spelling and metadata and the summed quantity. Items whose name is blank
/// after trimming are dropped.
///
/// # Arguments
///
/// * `items` - Flattened items, duplicates included
///
/// # Returns
///
/// Items with unique names
pub fn merge_items(items: Vec<CanonicalItem>) -> Vec<CanonicalItem> {
    let mut merged: Vec<CanonicalItem> = Vec::with_capacity(items.len());
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    let input_count = items.len();

    for mut item in items {
        let name = item
            .name
            .trim_matches(|c: char| c == ' ' || c == '\t')
            .to_string();
        if name.is_empty() {
            continue;
        }
        let key = name.to_uppercase();

        match index_by_key.get(&key) {
            Some(&index) => {
                let existing = &mut merged[index];
                existing.quantity = existing.quantity.saturating_add(item.quantity.max(0));
            }
            None => {
                item.name = name;
                item.quantity = item.quantity.max(0);
                index_by_key.insert(key, merged.len());
                merged.push(item);
            }
        }
    }

    if merged.len() < input_count {
        debug!("Merged {} items into {} unique names", input_count, merged.len());
    }
    merged
}
