//! Item normalization for parsed input
//!
//! Turns a parser result, usually the classifier's composite, into one
//! canonical item list.
//!
//! # Architecture
//!
//! - [`flatten`] - Per-format copy rules from parser items to canonical items
//! - [`merge`] - Case-insensitive de-duplication that sums quantities
//!
//! # Example Usage
//!
//! ```rust
//! use appraisal_engine::app::services::normalizer;
//! use appraisal_engine::app::services::parsers::{ParseResult, Listing, ListingItem};
//!
//! let listing = Listing {
//!     items: vec![
//!         ListingItem { name: "Tritanium".to_string(), quantity: 10 },
//!         ListingItem { name: " tritanium".to_string(), quantity: 5 },
//!     ],
//!     lines: vec![1, 2],
//! };
//! let items = normalizer::normalize(&ParseResult::Listing(listing));
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].quantity, 15);
//! ```

use crate::app::models::CanonicalItem;
use crate::app::services::parsers::ParseResult;

pub mod flatten;
pub mod merge;

#[cfg(test)]
pub mod tests;

pub use flatten::flatten;
pub use merge::merge_items;

/// Flatten a parser result and merge duplicate names
pub fn normalize(result: &ParseResult) -> Vec<CanonicalItem> {
    merge_items(flatten(result))
}
