//! Results of a check cycle.

use chrono::{DateTime, Utc};
use pricewatch_types::PriceChange;

/// What a check cycle did with one tracked asset.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetOutcome {
    /// No prior observation; the current price became the baseline.
    Baseline {
        /// Asset symbol.
        symbol: String,
        /// Price recorded.
        price: f64,
    },
    /// The move stayed under the threshold.
    Within {
        /// Asset symbol.
        symbol: String,
        /// Move against the baseline.
        change: PriceChange,
    },
    /// The move reached the threshold and an alert was attempted.
    Alerted {
        /// Asset symbol.
        symbol: String,
        /// Move against the baseline.
        change: PriceChange,
        /// Whether the notifier accepted the alert.
        delivered: bool,
    },
    /// The quote source returned no usable price; the asset was dropped from
    /// the store.
    Missing {
        /// Asset symbol.
        symbol: String,
    },
}

impl AssetOutcome {
    /// Returns the asset symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Baseline { symbol, .. }
            | Self::Within { symbol, .. }
            | Self::Alerted { symbol, .. }
            | Self::Missing { symbol } => symbol,
        }
    }

    /// Returns the price stored for the asset this cycle, if any.
    #[must_use]
    pub const fn stored_price(&self) -> Option<f64> {
        match self {
            Self::Baseline { price, .. } => Some(*price),
            Self::Within { change, .. } | Self::Alerted { change, .. } => Some(change.current),
            Self::Missing { .. } => None,
        }
    }

    /// Returns true if an alert was attempted.
    #[must_use]
    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::Alerted { .. })
    }
}

/// Summary of one completed check cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Per-asset results in processing order.
    pub assets: Vec<AssetOutcome>,
    /// Timestamp written with every stored observation.
    pub checked_at: DateTime<Utc>,
}

impl CheckOutcome {
    /// Returns the result for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&AssetOutcome> {
        self.assets.iter().find(|o| o.symbol() == symbol)
    }

    /// Returns the assets that triggered an alert.
    pub fn alerts(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.assets.iter().filter(|o| o.is_alert())
    }

    /// Returns how many alerts could not be delivered.
    #[must_use]
    pub fn undelivered(&self) -> usize {
        self.assets
            .iter()
            .filter(|o| matches!(o, AssetOutcome::Alerted { delivered: false, .. }))
            .count()
    }

    /// Returns how many observations were stored.
    #[must_use]
    pub fn stored(&self) -> usize {
        self.assets
            .iter()
            .filter(|o| o.stored_price().is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let outcome = CheckOutcome {
            assets: vec![
                AssetOutcome::Baseline {
                    symbol: "bitcoin".to_string(),
                    price: 95_000.0,
                },
                AssetOutcome::Alerted {
                    symbol: "ethereum".to_string(),
                    change: PriceChange::between(4.0, 5.0),
                    delivered: false,
                },
                AssetOutcome::Missing {
                    symbol: "solana".to_string(),
                },
            ],
            checked_at: Utc::now(),
        };

        assert_eq!(outcome.alerts().count(), 1);
        assert_eq!(outcome.undelivered(), 1);
        assert_eq!(outcome.stored(), 2);
        assert_eq!(outcome.get("ethereum").and_then(AssetOutcome::stored_price), Some(5.0));
        assert!(outcome.get("dogecoin").is_none());
    }
}
