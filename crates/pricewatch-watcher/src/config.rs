//! Watcher configuration.

use pricewatch_types::{Threshold, ThresholdError};
use std::collections::BTreeSet;
use thiserror::Error;

/// Assets tracked when none are given.
pub const DEFAULT_ASSETS: [&str; 2] = ["bitcoin", "ethereum"];

/// Quote currency when none is given.
pub const DEFAULT_CURRENCY: &str = "usd";

/// Errors from building a [`WatcherConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold is not a positive finite number.
    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    /// No assets to track.
    #[error("At least one asset must be tracked")]
    NoAssets,

    /// Currency code is blank.
    #[error("Quote currency must not be empty")]
    EmptyCurrency,
}

/// What a watcher checks and when it alerts.
///
/// Asset symbols are trimmed, lower-cased and de-duplicated; they are kept
/// sorted, which fixes the order assets are processed in.
#[derive(Debug, Clone, PartialEq)]
pub struct WatcherConfig {
    threshold: Threshold,
    assets: Vec<String>,
    currency: String,
}

impl WatcherConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is not finite and positive, no
    /// non-blank asset is given, or the currency is blank.
    pub fn new<I, S>(threshold_pct: f64, assets: I, currency: &str) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let threshold = Threshold::new(threshold_pct)?;

        let assets: BTreeSet<String> = assets
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if assets.is_empty() {
            return Err(ConfigError::NoAssets);
        }

        let currency = currency.trim().to_lowercase();
        if currency.is_empty() {
            return Err(ConfigError::EmptyCurrency);
        }

        Ok(Self {
            threshold,
            assets: assets.into_iter().collect(),
            currency,
        })
    }

    /// Alert threshold.
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Tracked asset symbols, sorted.
    #[must_use]
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Quote currency code, e.g. `usd`.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            assets: DEFAULT_ASSETS.iter().map(|s| (*s).to_string()).collect(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_assets() {
        let config =
            WatcherConfig::new(5.0, [" Ethereum", "bitcoin", "BITCOIN", ""], "USD").unwrap();
        assert_eq!(config.assets(), ["bitcoin", "ethereum"]);
        assert_eq!(config.currency(), "usd");
        assert_eq!(config.threshold().percent(), 5.0);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert!(matches!(
            WatcherConfig::new(0.0, ["bitcoin"], "usd"),
            Err(ConfigError::Threshold(_))
        ));
        assert!(matches!(
            WatcherConfig::new(f64::NAN, ["bitcoin"], "usd"),
            Err(ConfigError::Threshold(_))
        ));
    }

    #[test]
    fn test_rejects_empty_assets_and_currency() {
        let none: [&str; 0] = [];
        assert_eq!(
            WatcherConfig::new(5.0, none, "usd"),
            Err(ConfigError::NoAssets)
        );
        assert_eq!(
            WatcherConfig::new(5.0, ["  "], "usd"),
            Err(ConfigError::NoAssets)
        );
        assert_eq!(
            WatcherConfig::new(5.0, ["bitcoin"], " "),
            Err(ConfigError::EmptyCurrency)
        );
    }

    #[test]
    fn test_default() {
        let config = WatcherConfig::default();
        assert_eq!(config.assets(), ["bitcoin", "ethereum"]);
        assert_eq!(config.threshold(), Threshold::DEFAULT);
    }
}
