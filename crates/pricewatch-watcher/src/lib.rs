//! Threshold-based price change watcher for the pricewatch toolkit.
//!
//! - [`WatcherConfig`] - Threshold, tracked assets and quote currency
//! - [`PriceWatcher`] - Runs one check cycle over injected collaborators
//! - [`CheckOutcome`] / [`AssetOutcome`] - What happened to each asset
//! - [`WatchError`] - Why a cycle failed

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod outcome;
mod watcher;

pub use config::{ConfigError, DEFAULT_ASSETS, DEFAULT_CURRENCY, WatcherConfig};
pub use error::WatchError;
pub use outcome::{AssetOutcome, CheckOutcome};
pub use watcher::PriceWatcher;
