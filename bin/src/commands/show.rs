//! Show command implementation.

use anyhow::{Context, Result};
use pricewatch_lib::fmt::usd;
use pricewatch_lib::prelude::*;
use std::path::PathBuf;

/// Print the stored observations.
pub(crate) fn show(store: Option<PathBuf>) -> Result<()> {
    let store = store.map_or_else(JsonFileStore::with_default_path, JsonFileStore::new);
    let observations = store
        .load_all()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    if observations.is_empty() {
        println!("No observations stored in {}", store.path().display());
        return Ok(());
    }

    let registry = AssetRegistry::global();

    println!(
        "{:<14} {:<8} {:>16}  {}",
        "ASSET", "TICKER", "PRICE", "OBSERVED"
    );
    println!("{}", "-".repeat(64));

    for observation in observations.iter() {
        let asset = registry.describe(&observation.symbol);
        println!(
            "{:<14} {:<8} {:>16}  {}",
            observation.symbol,
            asset.ticker(),
            usd(observation.price),
            observation.observed_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    println!("\nStore: {}", store.path().display());
    Ok(())
}
