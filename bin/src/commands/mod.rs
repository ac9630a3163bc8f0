//! CLI command implementations.

use anyhow::{Context, Result};
use pricewatch_lib::{AssetRegistry, DEFAULT_ASSETS, TelegramConfig};
use std::collections::HashSet;
use tracing::warn;

pub(crate) mod assets;
pub(crate) mod check;
pub(crate) mod publish;
pub(crate) mod report;
pub(crate) mod show;

/// Builds Telegram settings when both credentials are present.
///
/// Returns `None` (with a warning) when either is missing.
pub(crate) fn telegram_config(
    token: Option<String>,
    chat_id: Option<String>,
) -> Result<Option<TelegramConfig>> {
    match (token, chat_id) {
        (Some(token), Some(chat_id)) => TelegramConfig::new(token, chat_id)
            .map(Some)
            .context("Invalid Telegram settings"),
        _ => {
            warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set, messages go to stdout");
            Ok(None)
        }
    }
}

/// Resolves user-supplied ids or tickers to asset ids, falling back to the
/// default set when none are given. Unknown names pass through unchanged.
///
/// Keeps the first occurrence of each id, in the order given.
pub(crate) fn resolve_assets(assets: &[String]) -> Vec<String> {
    if assets.is_empty() {
        return DEFAULT_ASSETS.iter().map(|s| (*s).to_string()).collect();
    }

    let registry = AssetRegistry::global();
    let mut seen = HashSet::new();
    assets
        .iter()
        .map(|a| {
            registry
                .resolve(a)
                .map_or_else(|| a.to_lowercase(), |asset| asset.id().to_string())
        })
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_assets() {
        assert_eq!(resolve_assets(&[]), ["bitcoin", "ethereum"]);
        assert_eq!(
            resolve_assets(&["BTC".to_string(), "Solana".to_string(), "newcoin".to_string()]),
            ["bitcoin", "solana", "newcoin"]
        );
    }

    #[test]
    fn test_resolve_assets_drops_repeats() {
        let given = ["BTC", "bitcoin", "eth", "Bitcoin", "ETH"].map(String::from);
        assert_eq!(resolve_assets(&given), ["bitcoin", "ethereum"]);
    }

    #[test]
    fn test_telegram_config_requires_both() {
        assert!(telegram_config(Some("t".to_string()), None).unwrap().is_none());
        assert!(
            telegram_config(Some("t".to_string()), Some("1".to_string()))
                .unwrap()
                .is_some()
        );
        assert!(telegram_config(Some(" ".to_string()), Some("1".to_string())).is_err());
    }
}
