//! Quote source traits.

use async_trait::async_trait;
use pricewatch_types::{IndexQuote, QuoteMap};

use crate::FetchError;

/// Provides current prices for a set of asset symbols.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetches quotes for `symbols` priced in `currency`.
    ///
    /// Symbols the source has no price for are absent from the result;
    /// that is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn quotes(&self, symbols: &[String], currency: &str) -> Result<QuoteMap, FetchError>;
}

/// Provides the latest quote of a stock index.
#[async_trait]
pub trait IndexSource: Send + Sync {
    /// Fetches the quote for an index symbol (e.g., `^IXIC`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or carries no quote.
    async fn index_quote(&self, symbol: &str) -> Result<IndexQuote, FetchError>;
}
