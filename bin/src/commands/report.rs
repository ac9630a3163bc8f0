//! Report command implementation.

use anyhow::{Context, Result};
use pricewatch_lib::DEFAULT_CURRENCY;
use pricewatch_lib::prelude::*;
use std::path::PathBuf;

use super::resolve_assets;

/// Collect market data and build the daily report.
pub(crate) async fn build_report(
    http: &HttpClient,
    assets: &[String],
    index: &str,
) -> DailyReport {
    let crypto = CoinGeckoSource::new(http.clone());
    let index_source = YahooChartSource::new(http.clone());

    let snapshot = MarketSnapshot::collect(
        &crypto,
        &index_source,
        &resolve_assets(assets),
        index,
        DEFAULT_CURRENCY,
    )
    .await;

    DailyReport::new(snapshot)
}

/// Build the daily report, print it, and optionally archive and send it.
pub(crate) async fn report(
    assets: &[String],
    index: &str,
    archive: Option<PathBuf>,
    send: bool,
    telegram: Option<TelegramConfig>,
    quiet: bool,
) -> Result<()> {
    let http = HttpClient::with_defaults().context("Failed to create HTTP client")?;
    let report = build_report(&http, assets, index).await;

    if !quiet {
        println!("{}", report.markdown());
    }

    if let Some(dir) = archive {
        let path = ReportArchive::new(dir)
            .save(&report)
            .context("Failed to archive report")?;
        if !quiet {
            println!("Saved {}", path.display());
        }
    }

    if send {
        let notifier: Box<dyn Notifier> = match telegram {
            Some(telegram) => Box::new(TelegramNotifier::new(http, telegram)),
            None => Box::new(ConsoleNotifier::new()),
        };
        notifier
            .notify(&report.chat_summary())
            .await
            .context("Failed to send report")?;
    }

    Ok(())
}
