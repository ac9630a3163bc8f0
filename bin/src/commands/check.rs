//! Check command implementation.
//!
//! Runs one watcher cycle against CoinGecko and the observation file.

use anyhow::{Context, Result};
use pricewatch_lib::AssetOutcome;
use pricewatch_lib::fmt::{signed_pct, usd};
use pricewatch_lib::prelude::*;
use std::path::PathBuf;

use super::resolve_assets;

/// Run one price check, alerting through Telegram or stdout.
pub(crate) async fn check(
    threshold: f64,
    assets: &[String],
    currency: &str,
    store: Option<PathBuf>,
    telegram: Option<TelegramConfig>,
    quiet: bool,
) -> Result<()> {
    let config = WatcherConfig::new(threshold, resolve_assets(assets), currency)
        .context("Invalid watcher configuration")?;

    let http = HttpClient::with_defaults().context("Failed to create HTTP client")?;
    let store = store.map_or_else(JsonFileStore::with_default_path, JsonFileStore::new);
    let store_path = store.path().to_path_buf();

    let notifier: Box<dyn Notifier> = match telegram {
        Some(telegram) => Box::new(TelegramNotifier::new(http.clone(), telegram)),
        None => Box::new(ConsoleNotifier::new()),
    };

    let watcher = PriceWatcher::new(config, CoinGeckoSource::new(http), store, notifier);
    let outcome = watcher.run_check().await.context("Price check failed")?;

    if quiet {
        return Ok(());
    }

    println!(
        "{:<14} {:>16} {:>10}  {}",
        "ASSET", "PRICE", "CHANGE", "RESULT"
    );
    println!("{}", "-".repeat(56));

    for asset in &outcome.assets {
        let (price, change, result) = match asset {
            AssetOutcome::Baseline { price, .. } => {
                (usd(*price), "-".to_string(), "baseline".to_string())
            }
            AssetOutcome::Within { change, .. } => (
                usd(change.current),
                signed_pct(change.percent),
                "ok".to_string(),
            ),
            AssetOutcome::Alerted {
                change, delivered, ..
            } => (
                usd(change.current),
                signed_pct(change.percent),
                if *delivered {
                    format!("alert ({})", change.direction())
                } else {
                    format!("alert ({}) not delivered", change.direction())
                },
            ),
            AssetOutcome::Missing { .. } => {
                ("-".to_string(), "-".to_string(), "no price".to_string())
            }
        };
        println!("{:<14} {:>16} {:>10}  {}", asset.symbol(), price, change, result);
    }

    println!(
        "\nThreshold {}, {} stored in {}",
        watcher.config().threshold(),
        outcome.stored(),
        store_path.display()
    );

    if outcome.undelivered() > 0 {
        println!("{} alert(s) could not be delivered", outcome.undelivered());
    }

    Ok(())
}
