//! Price observations and the per-symbol baseline set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The most recently observed price of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Asset symbol (e.g., "bitcoin").
    #[serde(default)]
    pub symbol: String,
    /// Observed price.
    pub price: f64,
    /// When the price was captured (UTC).
    pub observed_at: DateTime<Utc>,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub fn new(symbol: impl Into<String>, price: f64, observed_at: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            observed_at,
        }
    }
}

/// At most one [`Observation`] per symbol.
///
/// Serializes as a JSON object keyed by symbol. On deserialization each
/// record's `symbol` is taken from its key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Observation>",
    into = "BTreeMap<String, Observation>"
)]
pub struct ObservationSet {
    records: BTreeMap<String, Observation>,
}

impl ObservationSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Inserts an observation, replacing any previous one for the same symbol.
    ///
    /// Returns the replaced observation, if any.
    pub fn insert(&mut self, observation: Observation) -> Option<Observation> {
        self.records
            .insert(observation.symbol.clone(), observation)
    }

    /// Returns the observation for a symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Observation> {
        self.records.get(symbol)
    }

    /// Returns true if the set has an observation for the symbol.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.records.contains_key(symbol)
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the observations in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.records.values()
    }

    /// Returns the symbols in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, Observation>> for ObservationSet {
    fn from(mut records: BTreeMap<String, Observation>) -> Self {
        for (symbol, observation) in &mut records {
            if observation.symbol != *symbol {
                observation.symbol.clone_from(symbol);
            }
        }
        Self { records }
    }
}

impl From<ObservationSet> for BTreeMap<String, Observation> {
    fn from(set: ObservationSet) -> Self {
        set.records
    }
}

impl FromIterator<Observation> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut set = Self::new();
        for observation in iter {
            set.insert(observation);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_insert_replaces_same_symbol() {
        let mut set = ObservationSet::new();
        assert!(set.insert(Observation::new("bitcoin", 95_000.0, at())).is_none());

        let replaced = set.insert(Observation::new("bitcoin", 96_000.0, at()));
        assert_eq!(replaced.map(|o| o.price), Some(95_000.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("bitcoin").map(|o| o.price), Some(96_000.0));
    }

    #[test]
    fn test_symbols_sorted() {
        let set: ObservationSet = [
            Observation::new("ethereum", 4_000.0, at()),
            Observation::new("bitcoin", 95_000.0, at()),
        ]
        .into_iter()
        .collect();

        let symbols: Vec<_> = set.symbols().collect();
        assert_eq!(symbols, vec!["bitcoin", "ethereum"]);
    }

    #[test]
    fn test_json_keyed_by_symbol() {
        let set: ObservationSet = [Observation::new("bitcoin", 95_000.0, at())]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with("{\"bitcoin\":"));
        assert!(json.contains("\"price\":95000.0"));
        assert!(json.contains("2026-10-16T08:00:00Z"));
    }

    #[test]
    fn test_deserialize_takes_symbol_from_key() {
        let json = r#"{
            "bitcoin": {"price": 95000.0, "observed_at": "2026-10-16T08:00:00Z"},
            "ethereum": {"symbol": "wrong", "price": 4000.0, "observed_at": "2026-10-16T08:00:00Z"}
        }"#;

        let set: ObservationSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.get("bitcoin").unwrap().symbol, "bitcoin");
        assert_eq!(set.get("ethereum").unwrap().symbol, "ethereum");
    }
}
