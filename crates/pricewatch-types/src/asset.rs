//! Tracked asset definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::AssetKindParseError;

/// Asset kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Cryptocurrencies quoted by CoinGecko.
    Crypto,
    /// Stock indices quoted by the chart endpoint.
    Index,
}

impl AssetKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crypto => "crypto",
            Self::Index => "index",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = AssetKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crypto" => Ok(Self::Crypto),
            "index" => Ok(Self::Index),
            _ => Err(AssetKindParseError(s.to_string())),
        }
    }
}

/// A market asset that can be quoted and watched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Source identifier (CoinGecko id such as "bitcoin", or an index symbol such as "^IXIC").
    id: String,
    /// Short ticker used in messages (e.g., "BTC").
    ticker: String,
    /// Human-readable name (e.g., "Bitcoin").
    name: String,
    /// Asset kind.
    kind: AssetKind,
}

impl Asset {
    /// Creates a new asset.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        ticker: impl Into<String>,
        name: impl Into<String>,
        kind: AssetKind,
    ) -> Self {
        Self {
            id: id.into(),
            ticker: ticker.into(),
            name: name.into(),
            kind,
        }
    }

    /// Creates a crypto asset for an id with no registry entry.
    ///
    /// The ticker and name fall back to the upper-cased id.
    #[must_use]
    pub fn unlisted(id: &str) -> Self {
        let upper = id.to_uppercase();
        Self::new(id, upper.clone(), upper, AssetKind::Crypto)
    }

    /// Returns the source identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the asset kind.
    #[must_use]
    pub const fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Returns true if this is a cryptocurrency.
    #[must_use]
    pub const fn is_crypto(&self) -> bool {
        matches!(self.kind, AssetKind::Crypto)
    }

    /// Returns true if this is a stock index.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self.kind, AssetKind::Index)
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.ticker, self.id)
    }
}
