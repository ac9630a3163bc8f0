//! HTTP client and quote sources for the pricewatch market data toolkit.
//!
//! This crate provides the price-quote collaborators:
//!
//! - [`url`] - Endpoint URL construction
//! - [`HttpClient`] - Shared HTTP client with a fixed timeout and no retries
//! - [`QuoteSource`] / [`IndexSource`] - Traits implemented by quote providers
//! - [`CoinGeckoSource`] - Crypto prices from CoinGecko `simple/price`
//! - [`YahooChartSource`] - Index quotes from the Yahoo Finance chart endpoint

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod coingecko;
mod source;
pub mod url;
mod yahoo;

pub use client::{ClientConfig, FetchError, HttpClient};
pub use coingecko::{CoinGeckoSource, parse_simple_price};
pub use source::{IndexSource, QuoteSource};
pub use yahoo::{YahooChartSource, parse_chart};
