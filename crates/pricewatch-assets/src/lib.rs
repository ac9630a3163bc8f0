//! Asset registry for the pricewatch market data toolkit.
//!
//! This crate maps CoinGecko ids and index symbols to their tickers and
//! display names, so alerts can say "BTC" while the quote source is asked
//! for "bitcoin".
//!
//! # Example
//!
//! ```
//! use pricewatch_assets::AssetRegistry;
//!
//! let registry = AssetRegistry::global();
//!
//! // Lookup by id or by ticker
//! assert_eq!(registry.get("bitcoin").map(|a| a.ticker()), Some("BTC"));
//! assert_eq!(registry.resolve("eth").map(|a| a.id()), Some("ethereum"));
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use pricewatch_types::{Asset, AssetKind};

/// The asset metadata JSON embedded at compile time.
const ASSETS_JSON: &str = include_str!("../data/assets.json");

/// Global asset registry instance.
static REGISTRY: OnceLock<AssetRegistry> = OnceLock::new();

/// Registry of assets with known display metadata.
#[derive(Debug)]
pub struct AssetRegistry {
    assets: HashMap<String, Asset>,
}

impl AssetRegistry {
    /// Returns the global asset registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads assets from the embedded JSON data.
    fn load() -> Self {
        let assets: HashMap<String, Asset> =
            serde_json::from_str(ASSETS_JSON).expect("Invalid assets.json");
        Self { assets }
    }

    /// Looks up an asset by id (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.get(&id.to_lowercase())
    }

    /// Looks up an asset by ticker (case-insensitive).
    #[must_use]
    pub fn by_ticker(&self, ticker: &str) -> Option<&Asset> {
        self.assets
            .values()
            .find(|a| a.ticker().eq_ignore_ascii_case(ticker))
    }

    /// Looks up an asset by id, falling back to ticker.
    #[must_use]
    pub fn resolve(&self, id_or_ticker: &str) -> Option<&Asset> {
        self.get(id_or_ticker)
            .or_else(|| self.by_ticker(id_or_ticker))
    }

    /// Resolves an id for display, inventing an unlisted asset when unknown.
    #[must_use]
    pub fn describe(&self, id: &str) -> Asset {
        self.get(id).cloned().unwrap_or_else(|| Asset::unlisted(id))
    }

    /// Returns all assets as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    /// Returns the total number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Returns assets of the given kind, sorted by id.
    pub fn by_kind(&self, kind: AssetKind) -> Vec<&Asset> {
        let mut assets: Vec<&Asset> = self.assets.values().filter(|a| a.kind() == kind).collect();
        assets.sort_by(|a, b| a.id().cmp(b.id()));
        assets
    }
}
