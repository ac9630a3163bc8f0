//! Daily report rendering.

use chrono::{DateTime, NaiveDate, Utc};
use pricewatch_types::fmt::{signed_pct, usd, with_separators};
use std::fmt::Write;

use crate::{CryptoRow, MarketSnapshot};

const NOT_AVAILABLE: &str = "n/a";

const RISK_NOTICE: [&str; 2] = [
    "Markets are volatile and past moves do not predict returns",
    "Diversify rather than concentrate positions",
];

/// A dated market report built from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    snapshot: MarketSnapshot,
}

impl DailyReport {
    /// Creates a report from a snapshot.
    #[must_use]
    pub const fn new(snapshot: MarketSnapshot) -> Self {
        Self { snapshot }
    }

    /// Returns the underlying snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &MarketSnapshot {
        &self.snapshot
    }

    /// Returns when the report data was collected.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.snapshot.taken_at
    }

    /// Returns the report date (UTC).
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.snapshot.taken_at.date_naive()
    }

    /// Returns the archive file name, e.g. `report-2026-10-16.md`.
    #[must_use]
    pub fn file_name(&self) -> String {
        file_name_for(self.date())
    }

    /// Renders the full markdown report.
    #[must_use]
    pub fn markdown(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "# Daily Market Report - {}\n", self.date());

        md.push_str("## Crypto\n\n");
        match &self.snapshot.crypto {
            Ok(rows) => {
                md.push_str("| Asset | Price | 24h Change |\n");
                md.push_str("|-------|-------|------------|\n");
                for row in rows {
                    let (price, change) = crypto_cells(row);
                    let _ = writeln!(md, "| {} | {price} | {change} |", row.asset.ticker());
                }
            }
            Err(reason) => {
                let _ = writeln!(md, "data unavailable: {reason}");
            }
        }

        md.push_str("\n## US Stocks\n\n");
        match &self.snapshot.index {
            Ok(quote) => {
                md.push_str("| Index | Price | Change | Change % |\n");
                md.push_str("|-------|-------|--------|----------|\n");
                let _ = writeln!(
                    md,
                    "| {} | {} | {:+.2} | {} |",
                    self.snapshot.index_asset.ticker(),
                    with_separators(quote.price, 2),
                    quote.change(),
                    signed_pct(quote.change_pct()),
                );
            }
            Err(reason) => {
                let _ = writeln!(md, "data unavailable: {reason}");
            }
        }

        md.push_str("\n## Risk Notice\n\n");
        for line in RISK_NOTICE {
            let _ = writeln!(md, "- {line}");
        }

        let _ = write!(
            md,
            "\n---\n*Generated at {}*\n",
            self.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
        );
        md
    }

    /// Renders the short chat variant (Telegram Markdown).
    #[must_use]
    pub fn chat_summary(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(
            text,
            "📊 *Daily Market Report* - {}",
            self.generated_at().format("%Y-%m-%d %H:%M")
        );

        text.push_str("\n🪙 *Crypto*\n");
        match &self.snapshot.crypto {
            Ok(rows) => {
                for row in rows {
                    let (price, change) = crypto_cells(row);
                    let _ = writeln!(text, "- {}: {price} ({change})", row.asset.ticker());
                }
            }
            Err(reason) => {
                let _ = writeln!(text, "- data unavailable: {reason}");
            }
        }

        text.push_str("\n📈 *US Stocks*\n");
        match &self.snapshot.index {
            Ok(quote) => {
                let _ = writeln!(
                    text,
                    "- {}: {} ({:+.2}, {})",
                    self.snapshot.index_asset.ticker(),
                    with_separators(quote.price, 2),
                    quote.change(),
                    signed_pct(quote.change_pct()),
                );
            }
            Err(reason) => {
                let _ = writeln!(text, "- data unavailable: {reason}");
            }
        }

        text.push_str("\n⚠️ *Risk Notice*\n");
        for line in RISK_NOTICE {
            let _ = writeln!(text, "- {line}");
        }

        text.trim_end().to_string()
    }
}

/// Returns the archive file name for a date.
pub(crate) fn file_name_for(date: NaiveDate) -> String {
    format!("report-{}.md", date.format("%Y-%m-%d"))
}

fn crypto_cells(row: &CryptoRow) -> (String, String) {
    match &row.quote {
        Some(quote) => (
            usd(quote.price),
            quote
                .change_24h_pct
                .map_or_else(|| NOT_AVAILABLE.to_string(), signed_pct),
        ),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pricewatch_types::{Asset, IndexQuote, Quote};

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            crypto: Ok(vec![
                CryptoRow {
                    asset: Asset::unlisted("btc"),
                    quote: Some(Quote::new("bitcoin", 95_000.0).with_change_24h(1.5)),
                },
                CryptoRow {
                    asset: Asset::unlisted("eth"),
                    quote: None,
                },
            ]),
            index_asset: Asset::unlisted("nasdaq"),
            index: Ok(IndexQuote::new("^IXIC", 18_100.0, 18_000.0)),
            taken_at: Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_file_name() {
        let report = DailyReport::new(snapshot());
        assert_eq!(report.file_name(), "report-2026-10-16.md");
    }

    #[test]
    fn test_markdown() {
        let md = DailyReport::new(snapshot()).markdown();

        assert!(md.starts_with("# Daily Market Report - 2026-10-16\n"));
        assert!(md.contains("| BTC | $95,000.00 | +1.50% |"));
        assert!(md.contains("| ETH | n/a | n/a |"));
        assert!(md.contains("| NASDAQ | 18,100.00 | +100.00 | +0.56% |"));
        assert!(md.contains("## Risk Notice"));
        assert!(md.ends_with("*Generated at 2026-10-16 08:00:00 UTC*\n"));
    }

    #[test]
    fn test_markdown_failed_section() {
        let mut snapshot = snapshot();
        snapshot.index = Err("Server returned 429: rate limited".to_string());

        let md = DailyReport::new(snapshot).markdown();
        assert!(md.contains("data unavailable: Server returned 429: rate limited"));
        assert!(!md.contains("| Index |"));
        assert!(md.contains("| BTC |"));
    }

    #[test]
    fn test_chat_summary() {
        let text = DailyReport::new(snapshot()).chat_summary();

        assert!(text.starts_with("📊 *Daily Market Report* - 2026-10-16 08:00"));
        assert!(text.contains("- BTC: $95,000.00 (+1.50%)"));
        assert!(text.contains("- NASDAQ: 18,100.00 (+100.00, +0.56%)"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_chat_summary_failed_crypto() {
        let mut snapshot = snapshot();
        snapshot.crypto = Err("HTTP error: timed out".to_string());

        let text = DailyReport::new(snapshot).chat_summary();
        assert!(text.contains("🪙 *Crypto*\n- data unavailable: HTTP error: timed out"));
    }
}
