//! Assets command implementation.

use anyhow::Result;
use pricewatch_lib::prelude::*;

/// List the known assets grouped by kind.
pub(crate) fn list_assets() -> Result<()> {
    let registry = AssetRegistry::global();

    println!("{:<14} {:<8} {:<32} {:<8}", "ID", "TICKER", "NAME", "KIND");
    println!("{}", "-".repeat(64));

    for kind in [AssetKind::Crypto, AssetKind::Index] {
        for asset in registry.by_kind(kind) {
            println!(
                "{:<14} {:<8} {:<32} {:<8}",
                asset.id(),
                asset.ticker(),
                asset.name(),
                asset.kind().as_str()
            );
        }
    }

    println!("\nTotal: {} assets", registry.len());
    println!("Unlisted CoinGecko ids can still be tracked with --asset.");
    Ok(())
}
