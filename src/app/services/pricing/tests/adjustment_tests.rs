//! Tests for percentage adjustments

use super::*;
use crate::app::services::pricing::{Adjustments, adjustment_for};
use crate::app::services::type_catalog::tests::{PYERITE, TRITANIUM};
use crate::constants::BASE_ADJUSTMENT_ID;

#[test]
fn test_no_base_adjustment_means_none() {
    let mut adjustments = Adjustments::new();
    assert_eq!(adjustment_for(TRITANIUM, &adjustments), 0.0);

    adjustments.insert(TRITANIUM, 50.0);
    assert_eq!(adjustment_for(TRITANIUM, &adjustments), 0.0);
}

#[test]
fn test_override_wins_over_base() {
    let adjustments = Adjustments::from([(BASE_ADJUSTMENT_ID, 90.0), (TRITANIUM, 50.0)]);
    assert_eq!(adjustment_for(TRITANIUM, &adjustments), 50.0);
    assert_eq!(adjustment_for(PYERITE, &adjustments), 90.0);
}

#[test]
fn test_adjusted_totals() {
    let fixture = PricingFixture::new();
    let adjustments = Adjustments::from([(BASE_ADJUSTMENT_ID, 90.0), (TRITANIUM, 50.0)]);
    let mut items = vec![create_test_item("Tritanium", 100), create_test_item("Pyerite", 10)];

    let totals = fixture.engine().price_items(&mut items, "jita", &adjustments);

    assert_eq!(items[0].adjustment, 50.0);
    assert_eq!(items[1].adjustment, 90.0);
    // 100 x 0.5 x 5 + 10 x 0.9 x 10
    assert_close(totals.sell, 340.0);
    // 100 x 0.5 x 4 + 10 x 0.9 x 8
    assert_close(totals.buy, 272.0);
}

#[test]
fn test_empty_adjustments_leave_prices_alone() {
    let fixture = PricingFixture::new();
    let mut items = vec![create_test_item("Tritanium", 100)];

    let totals = fixture
        .engine()
        .price_items(&mut items, "jita", &Adjustments::new());

    assert_eq!(items[0].adjustment, 0.0);
    assert_eq!(items[0].effective_adjustment(), 1.0);
    assert_close(totals.sell, 500.0);
}
