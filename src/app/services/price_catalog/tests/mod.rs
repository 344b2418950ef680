//! Shared test utilities and fixtures for price catalog tests
//!
//! The fixture catalog is also used by the pricing and buyback tests.

use crate::app::models::prices::{PriceStats, Prices};
use crate::app::services::price_catalog::InMemoryPriceCatalog;
use crate::app::services::type_catalog::tests::*;
use std::fs;
use std::path::{Path, PathBuf};

pub mod catalog_tests;
pub mod loader_tests;

/// Market names used by the fixtures
pub const JITA: &str = "jita";
pub const AMARR: &str = "amarr";
pub const UNIVERSE: &str = "universe";

/// Create price statistics with the given best buy and best sell
pub fn create_test_prices(buy_max: f64, sell_min: f64) -> Prices {
    let side = |price: f64| PriceStats {
        average: price,
        max: price,
        median: price,
        min: price,
        percentile: price,
        stddev: 0.0,
        volume: 1000,
        order_count: 10,
    };

    let mut buy = side(buy_max);
    buy.min = buy_max * 0.5;
    let mut sell = side(sell_min);
    sell.max = sell_min * 2.0;

    Prices {
        all: side((buy_max + sell_min) / 2.0),
        buy,
        sell,
        strategy: "orders".to_string(),
        ..Prices::default()
    }
}

/// (type id, best buy, best sell) for the jita fixture market
pub const JITA_PRICES: &[(i64, f64, f64)] = &[
    (TRITANIUM, 4.0, 5.0),
    (PYERITE, 8.0, 10.0),
    (MEXALLON, 40.0, 50.0),
    (VELDSPAR, 10.0, 12.0),
    (SCORDITE, 15.0, 20.0),
    (CONCENTRATED_VELDSPAR, 11.0, 13.0),
    (COMPRESSED_VELDSPAR, 1000.0, 1200.0),
    (COMPRESSED_CONCENTRATED_VELDSPAR, 1100.0, 1300.0),
    (RIFTER, 200_000.0, 250_000.0),
    (RIFTER_BLUEPRINT, 1.0, 2.0),
    (SHIELD_EXTENDER, 3000.0, 3500.0),
    (BLUE_ICE, 2000.0, 2500.0),
    (HEAVY_WATER, 30.0, 35.0),
];

/// (type id, best buy, best sell) for the amarr fixture market
pub const AMARR_PRICES: &[(i64, f64, f64)] = &[
    (TRITANIUM, 3.0, 6.0),
    (PYERITE, 7.0, 11.0),
    (VELDSPAR, 9.0, 14.0),
];

/// Create the fixture price catalog
///
/// The universe market lists a deliberately low Rifter price.
pub fn create_test_price_catalog() -> InMemoryPriceCatalog {
    let mut catalog = InMemoryPriceCatalog::new();
    for &(type_id, buy, sell) in JITA_PRICES {
        catalog.insert(JITA, type_id, create_test_prices(buy, sell));
    }
    for &(type_id, buy, sell) in AMARR_PRICES {
        catalog.insert(AMARR, type_id, create_test_prices(buy, sell));
    }
    catalog.insert(UNIVERSE, TRITANIUM, create_test_prices(3.5, 4.5));
    catalog.insert(UNIVERSE, PYERITE, create_test_prices(7.5, 9.5));
    catalog.insert(UNIVERSE, RIFTER, create_test_prices(1.0, 1.0));
    catalog
}

/// Write a small `prices.json` file
pub fn create_test_prices_file(dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join("prices.json");
    let content = r#"{
  "jita": {
    "34": {"buy": {"max": 4.0, "volume": 10}, "sell": {"min": 5.0, "order_count": 3}, "strategy": "orders"},
    "35": {"buy": {"max": 8.0}, "sell": {"min": 10.0}}
  },
  "Amarr": {
    "34": {"buy": {"max": 3.0}, "sell": {"min": 6.0}, "updated": "2024-05-01T12:00:00Z"}
  }
}"#;
    fs::write(&path, content)?;
    Ok(path)
}
