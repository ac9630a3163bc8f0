//! Crypto price alerts and daily market reports.
//!
//! This is a facade crate that re-exports functionality from the pricewatch
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use pricewatch_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = HttpClient::with_defaults()?;
//!     let config = WatcherConfig::new(5.0, ["bitcoin", "ethereum"], "usd")?;
//!
//!     let watcher = PriceWatcher::new(
//!         config,
//!         CoinGeckoSource::new(http),
//!         JsonFileStore::with_default_path(),
//!         ConsoleNotifier::new(),
//!     );
//!
//!     let outcome = watcher.run_check().await?;
//!     println!("{} alerts", outcome.alerts().count());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use pricewatch_types::*;

// Re-export asset registry
pub use pricewatch_assets::AssetRegistry;

// Re-export quote sources
pub use pricewatch_fetch::{
    ClientConfig, CoinGeckoSource, FetchError, HttpClient, IndexSource, QuoteSource,
    YahooChartSource,
};

// Re-export persistence
pub use pricewatch_store::{JsonFileStore, MemoryStore, ObservationStore, StoreError};

// Re-export delivery
pub use pricewatch_notify::{
    AlertMessage, ConsoleNotifier, Notifier, NotifyError, TelegramConfig, TelegramNotifier,
};

// Re-export the watcher
#[cfg(feature = "watcher")]
pub use pricewatch_watcher::{
    AssetOutcome, CheckOutcome, ConfigError, DEFAULT_ASSETS, DEFAULT_CURRENCY, PriceWatcher,
    WatchError, WatcherConfig,
};

// Re-export reports
#[cfg(feature = "report")]
pub use pricewatch_report::{
    ArchiveError, DailyReport, GithubPublisher, MarketSnapshot, PublishError, ReportArchive,
    Upsert,
};

/// Prelude module for convenient imports.
///
/// ```
/// use pricewatch_lib::prelude::*;
/// ```
pub mod prelude {
    pub use pricewatch_types::{
        Asset, AssetKind, Direction, IndexQuote, Observation, ObservationSet, PriceChange, Quote,
        QuoteMap, Threshold,
    };

    pub use pricewatch_assets::AssetRegistry;

    pub use pricewatch_fetch::{
        ClientConfig, CoinGeckoSource, HttpClient, IndexSource, QuoteSource, YahooChartSource,
    };

    pub use pricewatch_store::{JsonFileStore, MemoryStore, ObservationStore};

    pub use pricewatch_notify::{ConsoleNotifier, Notifier, TelegramConfig, TelegramNotifier};

    #[cfg(feature = "watcher")]
    pub use pricewatch_watcher::{CheckOutcome, PriceWatcher, WatcherConfig};

    #[cfg(feature = "report")]
    pub use pricewatch_report::{DailyReport, GithubPublisher, MarketSnapshot, ReportArchive};
}
