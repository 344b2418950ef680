//! Market price statistics and their arithmetic
//!
//! Price statistics are combined when baskets are built (summing component
//! prices), scaled (quantities, yield bonuses, production efficiency) and
//! differenced (blueprint copy net value). Volumes are traded quantities, not
//! prices, so they accumulate under both addition and subtraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Distribution statistics for one side of a market
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    #[serde(rename = "avg", default)]
    pub average: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub percentile: f64,
    #[serde(default)]
    pub stddev: f64,
    #[serde(default)]
    pub volume: i64,
    #[serde(default)]
    pub order_count: i64,
}

impl PriceStats {
    /// Replace every price figure with a single value, leaving spread and volume alone
    fn set_constant(&mut self, price: f64) {
        self.average = price;
        self.max = price;
        self.min = price;
        self.median = price;
        self.percentile = price;
    }

    fn plus(mut self, other: &PriceStats) -> Self {
        self.average += other.average;
        self.max += other.max;
        self.min += other.min;
        self.median += other.median;
        self.percentile += other.percentile;
        self.stddev += other.stddev;
        self.volume += other.volume;
        self
    }

    fn minus(mut self, other: &PriceStats) -> Self {
        self.average -= other.average;
        self.max -= other.max;
        self.min -= other.min;
        self.median -= other.median;
        self.percentile -= other.percentile;
        self.stddev -= other.stddev;
        // traded volume never cancels out
        self.volume += other.volume;
        self
    }

    fn scaled(mut self, factor: f64) -> Self {
        self.average *= factor;
        self.max *= factor;
        self.min *= factor;
        self.median *= factor;
        self.percentile *= factor;
        self.stddev *= factor;
        self
    }
}

/// Aggregate price statistics for one type in one market
///
/// `order_count` is carried from the left-hand operand through every
/// arithmetic operation; it describes the market snapshot, not the basket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub all: PriceStats,
    #[serde(default)]
    pub buy: PriceStats,
    #[serde(default)]
    pub sell: PriceStats,
    #[serde(default)]
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub strategy: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub basis: String,
}

impl Prices {
    /// Empty statistics tagged with a strategy label
    pub fn with_strategy(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            ..Self::default()
        }
    }

    /// Substitute a single representative price on every side
    pub fn set(mut self, price: f64) -> Self {
        self.all.set_constant(price);
        self.buy.set_constant(price);
        self.sell.set_constant(price);
        self
    }

    /// True when no side carries a price
    pub fn is_zero(&self) -> bool {
        self.buy.max == 0.0 && self.sell.min == 0.0 && self.all.average == 0.0
    }
}

impl Add<&Prices> for Prices {
    type Output = Prices;

    fn add(mut self, rhs: &Prices) -> Prices {
        self.all = self.all.plus(&rhs.all);
        self.buy = self.buy.plus(&rhs.buy);
        self.sell = self.sell.plus(&rhs.sell);
        self
    }
}

impl Add for Prices {
    type Output = Prices;

    fn add(self, rhs: Prices) -> Prices {
        self + &rhs
    }
}

impl Sub<&Prices> for Prices {
    type Output = Prices;

    fn sub(mut self, rhs: &Prices) -> Prices {
        self.all = self.all.minus(&rhs.all);
        self.buy = self.buy.minus(&rhs.buy);
        self.sell = self.sell.minus(&rhs.sell);
        self
    }
}

impl Sub for Prices {
    type Output = Prices;

    fn sub(self, rhs: Prices) -> Prices {
        self - &rhs
    }
}

impl Mul<f64> for Prices {
    type Output = Prices;

    fn mul(mut self, factor: f64) -> Prices {
        self.all = self.all.scaled(factor);
        self.buy = self.buy.scaled(factor);
        self.sell = self.sell.scaled(factor);
        self
    }
}

impl fmt::Display for Prices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sell = {:.2} ISK, Buy = {:.2} ISK (Updated {}) (Using {})",
            self.sell.min, self.buy.max, self.updated, self.strategy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(base: f64, volume: i64) -> PriceStats {
        PriceStats {
            average: base,
            max: base * 2.0,
            median: base,
            min: base / 2.0,
            percentile: base * 1.5,
            stddev: 0.25,
            volume,
            order_count: 7,
        }
    }

    fn prices(base: f64, volume: i64) -> Prices {
        Prices {
            all: stats(base, volume),
            buy: stats(base - 1.0, volume),
            sell: stats(base + 1.0, volume),
            strategy: "market".to_string(),
            ..Prices::default()
        }
    }

    #[test]
    fn test_add_then_sub_restores_prices_but_not_volume() {
        let a = prices(100.0, 10);
        let b = prices(40.0, 4);

        let result = (a.clone() + &b) - &b;

        assert_eq!(result.sell.min, a.sell.min);
        assert_eq!(result.buy.max, a.buy.max);
        assert_eq!(result.all.average, a.all.average);
        assert_eq!(result.all.stddev, a.all.stddev);
        // 10 + 4 + 4
        assert_eq!(result.all.volume, 18);
        assert_eq!(result.buy.volume, 18);
    }

    #[test]
    fn test_mul_scales_prices_and_keeps_volume() {
        let scaled = prices(100.0, 10) * 3.0;
        assert_eq!(scaled.all.average, 300.0);
        assert_eq!(scaled.sell.min, 151.5);
        assert_eq!(scaled.all.volume, 10);
        assert_eq!(scaled.strategy, "market");
    }

    #[test]
    fn test_set_replaces_prices_only() {
        let set = prices(100.0, 10).set(42.0);
        assert_eq!(set.buy.max, 42.0);
        assert_eq!(set.sell.min, 42.0);
        assert_eq!(set.all.percentile, 42.0);
        assert_eq!(set.all.stddev, 0.25);
        assert_eq!(set.sell.volume, 10);
    }

    #[test]
    fn test_order_count_follows_left_operand() {
        let mut b = prices(1.0, 1);
        b.all.order_count = 99;
        let sum = prices(2.0, 1) + b;
        assert_eq!(sum.all.order_count, 7);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(prices(10.0, 1)).unwrap();
        assert!(json["sell"].get("avg").is_some());
        assert!(json["sell"].get("order_count").is_some());
        assert!(json.get("basis").is_none());
    }
}
