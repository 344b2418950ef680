//! Tests for price lookups

use super::*;
use crate::Error;
use crate::app::services::price_catalog::PriceCatalog;

#[test]
fn test_get_price() {
    let catalog = create_test_price_catalog();

    let prices = catalog.get_price(JITA, TRITANIUM).unwrap();
    assert_eq!(prices.buy.max, 4.0);
    assert_eq!(prices.sell.min, 5.0);

    assert_eq!(catalog.get_price(AMARR, TRITANIUM).unwrap().sell.min, 6.0);
    assert!(catalog.get_price(AMARR, RIFTER).is_none());
    assert!(catalog.get_price("dodixie", TRITANIUM).is_none());
}

#[test]
fn test_market_names_are_case_insensitive() {
    let catalog = create_test_price_catalog();
    assert!(catalog.get_price("Jita", PYERITE).is_some());
    assert!(catalog.has_market("AMARR"));
}

#[test]
fn test_require_price() {
    let catalog = create_test_price_catalog();
    assert!(catalog.require_price(JITA, RIFTER).is_ok());

    let err = catalog.require_price(AMARR, RIFTER).unwrap_err();
    assert!(matches!(
        err,
        Error::PriceNotFound { ref market, type_id } if market == AMARR && type_id == RIFTER
    ));
}

#[test]
fn test_insert_replaces_existing() {
    let mut catalog = create_test_price_catalog();
    let count = catalog.price_count();
    catalog.insert(JITA, TRITANIUM, create_test_prices(1.0, 2.0));
    assert_eq!(catalog.price_count(), count);
    assert_eq!(catalog.get_price(JITA, TRITANIUM).unwrap().buy.max, 1.0);
}

#[test]
fn test_market_names_sorted() {
    let catalog = create_test_price_catalog();
    assert_eq!(catalog.market_names(), vec![AMARR, JITA, UNIVERSE]);
}
