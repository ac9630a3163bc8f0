//! Yahoo Finance chart endpoint for index quotes.

use async_trait::async_trait;
use pricewatch_types::IndexQuote;
use serde::Deserialize;
use tracing::debug;

use crate::url::{YAHOO_BASE_URL, chart_url};
use crate::{FetchError, HttpClient, IndexSource};

/// The chart endpoint rejects non-browser user agents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Index quotes from the Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooChartSource {
    http: HttpClient,
    base_url: String,
}

impl YahooChartSource {
    /// Creates a source against the public Yahoo Finance API.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self::with_base_url(http, YAHOO_BASE_URL)
    }

    /// Creates a source against a custom base URL.
    #[must_use]
    pub fn with_base_url(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl IndexSource for YahooChartSource {
    async fn index_quote(&self, symbol: &str) -> Result<IndexQuote, FetchError> {
        let url = chart_url(&self.base_url, symbol);
        debug!(%url, "requesting index chart");

        let request = self
            .http
            .inner()
            .get(&url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT);
        let body = self.http.send_text(request).await?;

        parse_chart(&body, symbol)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    chart_previous_close: Option<f64>,
}

/// Parses a chart response body into an index quote.
///
/// Reads `chart.result[0].meta`. The previous close falls back to
/// `chartPreviousClose`, then to the current price.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] for malformed JSON and
/// [`FetchError::NoData`] when the result is empty or carries no price.
pub fn parse_chart(body: &str, symbol: &str) -> Result<IndexQuote, FetchError> {
    let response: ChartResponse = serde_json::from_str(body)?;

    let meta = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .map(|result| result.meta)
        .ok_or_else(|| FetchError::NoData(symbol.to_string()))?;

    let price = meta
        .regular_market_price
        .ok_or_else(|| FetchError::NoData(symbol.to_string()))?;
    let previous_close = meta
        .previous_close
        .or(meta.chart_previous_close)
        .unwrap_or(price);

    Ok(IndexQuote::new(symbol, price, previous_close))
}
