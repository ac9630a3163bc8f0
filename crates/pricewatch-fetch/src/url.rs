//! Quote endpoint URL construction.

/// Base URL for the CoinGecko public API.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Base URL for the Yahoo Finance query API.
pub const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Builds the CoinGecko `simple/price` URL for the given ids.
///
/// URL format: `{base}/simple/price?ids={ids}&vs_currencies={currency}&include_24hr_change=true&include_24hr_vol=true&include_market_cap=true`
///
/// # Example
///
/// ```
/// use pricewatch_fetch::url::{COINGECKO_BASE_URL, simple_price_url};
///
/// let url = simple_price_url(COINGECKO_BASE_URL, &["bitcoin", "ethereum"], "usd");
/// assert!(url.starts_with("https://api.coingecko.com/api/v3/simple/price?ids=bitcoin,ethereum&vs_currencies=usd"));
/// ```
#[must_use]
pub fn simple_price_url(base: &str, ids: &[&str], currency: &str) -> String {
    let ids: Vec<String> = ids.iter().map(|id| encode_component(id)).collect();
    format!(
        "{}/simple/price?ids={}&vs_currencies={}&include_24hr_change=true&include_24hr_vol=true&include_market_cap=true",
        base.trim_end_matches('/'),
        ids.join(","),
        encode_component(&currency.to_lowercase()),
    )
}

/// Builds the Yahoo Finance chart URL for an index symbol.
///
/// URL format: `{base}/v8/finance/chart/{symbol}` with the symbol percent-encoded,
/// so `^IXIC` becomes `%5EIXIC`.
#[must_use]
pub fn chart_url(base: &str, symbol: &str) -> String {
    format!(
        "{}/v8/finance/chart/{}",
        base.trim_end_matches('/'),
        encode_component(symbol)
    )
}

/// Percent-encodes everything outside the URL unreserved set.
fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
