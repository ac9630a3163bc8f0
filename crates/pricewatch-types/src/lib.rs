//! Core types for the pricewatch market data toolkit.
//!
//! This crate provides the fundamental data structures used throughout pricewatch:
//!
//! - [`Asset`] - A tracked asset with its display metadata
//! - [`Observation`] - The most recent known price of one asset
//! - [`ObservationSet`] - One observation per symbol, the watcher's baseline
//! - [`Quote`] / [`IndexQuote`] - Current prices returned by a quote source
//! - [`PriceChange`] - Percentage move between two prices, with [`Direction`]
//! - [`Threshold`] - Validated alert threshold in percent
//! - [`fmt`] - Money and percentage formatting

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod asset;
mod change;
mod error;
pub mod fmt;
mod observation;
mod quote;

pub use asset::{Asset, AssetKind};
pub use change::{Direction, PriceChange, Threshold, percent_change};
pub use error::{AssetKindParseError, ThresholdError};
pub use observation::{Observation, ObservationSet};
pub use quote::{IndexQuote, Quote, QuoteMap};
