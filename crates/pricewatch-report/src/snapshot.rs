//! Market data collection for a report.

use chrono::{DateTime, Utc};
use pricewatch_assets::AssetRegistry;
use pricewatch_fetch::{IndexSource, QuoteSource};
use pricewatch_types::{Asset, IndexQuote, Quote};
use tracing::{debug, warn};

/// One line of the crypto table. `quote` is `None` when the source had no
/// price for the asset.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoRow {
    /// Asset metadata.
    pub asset: Asset,
    /// Fetched quote, if any.
    pub quote: Option<Quote>,
}

/// Crypto and index data gathered for one report.
///
/// Each half holds either its data or the text of the error that prevented
/// it, so a failing source only blanks its own section.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    /// Crypto rows in requested order, or the fetch error.
    pub crypto: Result<Vec<CryptoRow>, String>,
    /// The index being reported.
    pub index_asset: Asset,
    /// Index quote, or the fetch error.
    pub index: Result<IndexQuote, String>,
    /// When the data was collected.
    pub taken_at: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Fetches crypto quotes and the index quote concurrently.
    pub async fn collect<Q, I>(
        quotes: &Q,
        index: &I,
        crypto_ids: &[String],
        index_symbol: &str,
        currency: &str,
    ) -> Self
    where
        Q: QuoteSource + ?Sized,
        I: IndexSource + ?Sized,
    {
        let (crypto, index_quote) = futures::join!(
            quotes.quotes(crypto_ids, currency),
            index.index_quote(index_symbol)
        );

        let registry = AssetRegistry::global();

        let crypto = match crypto {
            Ok(map) => {
                debug!(count = map.len(), "crypto quotes collected");
                Ok(crypto_ids
                    .iter()
                    .map(|id| CryptoRow {
                        asset: registry.describe(id),
                        quote: map.get(id).cloned(),
                    })
                    .collect())
            }
            Err(e) => {
                warn!(error = %e, "crypto quotes unavailable");
                Err(e.to_string())
            }
        };

        let index_quote = index_quote.map_err(|e| {
            warn!(symbol = index_symbol, error = %e, "index quote unavailable");
            e.to_string()
        });

        Self {
            crypto,
            index_asset: registry.describe(index_symbol),
            index: index_quote,
            taken_at: Utc::now(),
        }
    }

    /// Returns true if neither section has data.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.crypto.is_err() && self.index.is_err()
    }
}
