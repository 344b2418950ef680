//! Tests for price catalog loading

use super::*;
use crate::Error;
use crate::app::services::price_catalog::{InMemoryPriceCatalog, PriceCatalog};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

#[tokio::test]
async fn test_load_from_file_success() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_prices_file(temp_dir.path()).unwrap();

    let (catalog, stats) = InMemoryPriceCatalog::load_from_file(&path).await.unwrap();

    assert_eq!(stats.records_found, 3);
    assert_eq!(stats.records_loaded, 3);
    assert_eq!(catalog.price_count(), 3);
    assert_eq!(catalog.market_names(), vec!["amarr", "jita"]);

    let tritanium = catalog.get_price(JITA, TRITANIUM).unwrap();
    assert_eq!(tritanium.buy.max, 4.0);
    assert_eq!(tritanium.buy.volume, 10);
    assert_eq!(tritanium.sell.order_count, 3);
    assert_eq!(tritanium.strategy, "orders");

    let amarr = catalog.get_price(AMARR, TRITANIUM).unwrap();
    assert_eq!(
        amarr.updated,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_load_from_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = InMemoryPriceCatalog::load_from_file(&temp_dir.path().join("prices.json")).await;
    assert!(matches!(result, Err(Error::Catalog { .. })));
}

#[test]
fn test_from_json_str_skips_invalid_entries() {
    let json = r#"{
        "jita": {"34": {"sell": {"min": 5.0}}, "0": {"sell": {"min": 1.0}}},
        " ": {"35": {"sell": {"min": 1.0}}}
    }"#;

    let (catalog, stats) = InMemoryPriceCatalog::from_json_str(json).unwrap();

    assert_eq!(stats.records_found, 3);
    assert_eq!(stats.records_loaded, 1);
    assert_eq!(stats.invalid_skipped, 2);
    assert!(stats.has_errors());
    assert_eq!(catalog.price_count(), 1);
}

#[test]
fn test_from_json_str_rejects_non_numeric_type_ids() {
    let result = InMemoryPriceCatalog::from_json_str(r#"{"jita": {"tritanium": {}}}"#);
    assert!(matches!(result, Err(Error::Serialization { .. })));
}
