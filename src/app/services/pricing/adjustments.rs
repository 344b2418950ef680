//! Per-type percentage price adjustments

use crate::constants::BASE_ADJUSTMENT_ID;
use std::collections::HashMap;

/// Adjustment table keyed by type id; the base adjustment lives under
/// [`BASE_ADJUSTMENT_ID`]
pub type Adjustments = HashMap<i64, f64>;

/// Percentage adjustment for a type
///
/// Without a nonzero base adjustment no adjustment applies and zero is
/// returned, even if the table holds per-type entries. Otherwise a per-type
/// override wins over the base.
pub fn adjustment_for(type_id: i64, adjustments: &Adjustments) -> f64 {
    let base = adjustments.get(&BASE_ADJUSTMENT_ID).copied().unwrap_or(0.0);
    if base == 0.0 {
        return 0.0;
    }
    adjustments.get(&type_id).copied().unwrap_or(base)
}
