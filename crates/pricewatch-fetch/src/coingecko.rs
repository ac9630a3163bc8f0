//! CoinGecko `simple/price` quote source.

use async_trait::async_trait;
use pricewatch_types::{Quote, QuoteMap};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::url::{COINGECKO_BASE_URL, simple_price_url};
use crate::{FetchError, HttpClient, QuoteSource};

/// Crypto prices from the CoinGecko public API.
#[derive(Debug, Clone)]
pub struct CoinGeckoSource {
    http: HttpClient,
    base_url: String,
}

impl CoinGeckoSource {
    /// Creates a source against the public CoinGecko API.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self::with_base_url(http, COINGECKO_BASE_URL)
    }

    /// Creates a source against a custom base URL (mirror or test server).
    #[must_use]
    pub fn with_base_url(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QuoteSource for CoinGeckoSource {
    async fn quotes(&self, symbols: &[String], currency: &str) -> Result<QuoteMap, FetchError> {
        if symbols.is_empty() {
            return Ok(QuoteMap::new());
        }

        let ids: Vec<&str> = symbols.iter().map(String::as_str).collect();
        let url = simple_price_url(&self.base_url, &ids, currency);
        debug!(%url, "requesting coingecko prices");

        let request = self
            .http
            .inner()
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");
        let body = self.http.send_text(request).await?;

        parse_simple_price(&body, currency)
    }
}

/// Parses a `simple/price` response body.
///
/// The body looks like
/// `{"bitcoin": {"usd": 95000.0, "usd_24h_change": 1.2, "usd_24h_vol": 3.1e10}}`.
/// Entries without a positive, finite price in `currency` are skipped.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body is not a JSON object of objects.
pub fn parse_simple_price(body: &str, currency: &str) -> Result<QuoteMap, FetchError> {
    let parsed: BTreeMap<String, BTreeMap<String, Option<f64>>> = serde_json::from_str(body)?;

    let currency = currency.to_lowercase();
    let change_key = format!("{currency}_24h_change");
    let volume_key = format!("{currency}_24h_vol");
    let cap_key = format!("{currency}_market_cap");

    let mut quotes = QuoteMap::new();
    for (id, fields) in parsed {
        let field = |key: &str| fields.get(key).copied().flatten();

        let Some(price) = field(currency.as_str()) else {
            warn!(symbol = %id, %currency, "coingecko response has no price");
            continue;
        };

        let quote = Quote {
            symbol: id.clone(),
            price,
            change_24h_pct: field(change_key.as_str()),
            volume_24h: field(volume_key.as_str()),
            market_cap: field(cap_key.as_str()),
        };

        if !quote.has_valid_price() {
            warn!(symbol = %id, price, "discarding non-positive price");
            continue;
        }

        quotes.insert(id, quote);
    }

    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BODY: &str = r#"{
        "bitcoin": {"usd": 95000.5, "usd_24h_change": -1.25, "usd_24h_vol": 31000000000.0, "usd_market_cap": 1.9e12},
        "ethereum": {"usd": 3900.0, "usd_24h_change": null}
    }"#;

    #[test]
    fn test_parse_simple_price() {
        let quotes = parse_simple_price(BODY, "usd").unwrap();
        assert_eq!(quotes.len(), 2);

        let btc = &quotes["bitcoin"];
        assert_relative_eq!(btc.price, 95000.5);
        assert_eq!(btc.change_24h_pct, Some(-1.25));
        assert_eq!(btc.volume_24h, Some(31_000_000_000.0));
        assert_eq!(btc.market_cap, Some(1.9e12));

        let eth = &quotes["ethereum"];
        assert_eq!(eth.symbol, "ethereum");
        assert_eq!(eth.change_24h_pct, None);
        assert_eq!(eth.volume_24h, None);
    }

    #[test]
    fn test_parse_other_currency_is_missing() {
        let quotes = parse_simple_price(BODY, "eur").unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_parse_skips_invalid_prices() {
        let body = r#"{"bitcoin": {"usd": 0.0}, "ethereum": {"usd": -3.0}, "solana": {"usd": 150.0}}"#;
        let quotes = parse_simple_price(body, "USD").unwrap();
        assert_eq!(quotes.keys().collect::<Vec<_>>(), vec!["solana"]);
    }

    #[test]
    fn test_parse_empty_object() {
        assert!(parse_simple_price("{}", "usd").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(
            parse_simple_price("<html>rate limited</html>", "usd"),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(
            parse_simple_price(
                r#"{"status": {"error_code": 429, "error_message": "rate limited"}}"#,
                "usd"
            ),
            Err(FetchError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_symbols_skip_request() {
        let http = HttpClient::with_defaults().unwrap();
        let source = CoinGeckoSource::with_base_url(http, "http://127.0.0.1:9");
        let quotes = source.quotes(&[], "usd").await.unwrap();
        assert!(quotes.is_empty());
    }
}
