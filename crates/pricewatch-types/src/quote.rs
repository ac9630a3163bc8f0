//! Current price quotes returned by quote sources.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::percent_change;

/// Quotes keyed by asset symbol.
pub type QuoteMap = BTreeMap<String, Quote>;

/// Current price of one asset in the target currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Asset symbol (e.g., "bitcoin").
    pub symbol: String,
    /// Current price.
    pub price: f64,
    /// 24-hour percentage change, if the source reports it.
    pub change_24h_pct: Option<f64>,
    /// 24-hour traded volume, if the source reports it.
    pub volume_24h: Option<f64>,
    /// Market capitalization, if the source reports it.
    pub market_cap: Option<f64>,
}

impl Quote {
    /// Creates a quote with only a price.
    #[must_use]
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change_24h_pct: None,
            volume_24h: None,
            market_cap: None,
        }
    }

    /// Sets the 24-hour percentage change.
    #[must_use]
    pub const fn with_change_24h(mut self, change_pct: f64) -> Self {
        self.change_24h_pct = Some(change_pct);
        self
    }

    /// Returns true if the price is a usable positive number.
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// Quote for a stock index against its previous close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    /// Index symbol (e.g., "^IXIC").
    pub symbol: String,
    /// Latest regular-market price.
    pub price: f64,
    /// Previous session close.
    pub previous_close: f64,
}

impl IndexQuote {
    /// Creates a new index quote.
    #[must_use]
    pub fn new(symbol: impl Into<String>, price: f64, previous_close: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            previous_close,
        }
    }

    /// Returns the absolute change against the previous close.
    #[must_use]
    pub fn change(&self) -> f64 {
        self.price - self.previous_close
    }

    /// Returns the percentage change against the previous close.
    #[must_use]
    pub fn change_pct(&self) -> f64 {
        percent_change(self.previous_close, self.price)
    }
}
