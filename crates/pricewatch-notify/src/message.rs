//! Alert message rendering.

use chrono::{DateTime, Utc};
use pricewatch_types::{Direction, PriceChange, fmt};

/// A threshold-crossing alert ready to be rendered for a chat.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    /// Display ticker, e.g. `BTC`.
    pub ticker: String,
    /// Current price.
    pub price: f64,
    /// Signed percentage change against the baseline.
    pub change_pct: f64,
    /// When the price was observed.
    pub at: DateTime<Utc>,
}

impl AlertMessage {
    /// Creates an alert from a computed change.
    #[must_use]
    pub fn new(ticker: impl Into<String>, change: &PriceChange, at: DateTime<Utc>) -> Self {
        Self {
            ticker: ticker.into(),
            price: change.current,
            change_pct: change.percent,
            at,
        }
    }

    /// Returns the direction of the move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::of(self.change_pct)
    }

    /// Renders the alert as Telegram Markdown.
    #[must_use]
    pub fn render(&self) -> String {
        let direction = self.direction();
        let arrow = match direction {
            Direction::Up => "🚀",
            Direction::Down => "🔻",
        };

        format!(
            "⚠️ *Price alert - {ticker}*\n\n\
             {arrow} *{label} {pct:.2}%*\n\n\
             💰 Current price: {price}\n\
             ⏰ Time: {time}\n\n\
             #crypto #{ticker}",
            ticker = self.ticker,
            label = direction.as_str().to_uppercase(),
            pct = self.change_pct.abs(),
            price = fmt::usd(self.price),
            time = self.at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

impl std::fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_render_up() {
        let message = AlertMessage {
            ticker: "BTC".to_string(),
            price: 106_000.0,
            change_pct: 6.0,
            at: at(),
        };

        assert_eq!(
            message.render(),
            "⚠️ *Price alert - BTC*\n\n🚀 *UP 6.00%*\n\n💰 Current price: $106,000.00\n\
             ⏰ Time: 2026-10-16 09:30:00 UTC\n\n#crypto #BTC"
        );
    }

    #[test]
    fn test_render_down_uses_magnitude() {
        let change = PriceChange::between(4.0, 3.0);
        let message = AlertMessage::new("ETH", &change, at());

        let text = message.render();
        assert!(text.contains("🔻 *DOWN 25.00%*"));
        assert!(text.contains("$3.00"));
        assert!(text.ends_with("#ETH"));
        assert_eq!(message.direction(), Direction::Down);
    }
}
