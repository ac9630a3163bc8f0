//! Observation persistence for the pricewatch market data toolkit.
//!
//! - [`ObservationStore`] - Get-all / put-all persistence interface
//! - [`JsonFileStore`] - Single JSON file on disk
//! - [`MemoryStore`] - In-process store with injectable failures
//! - [`StoreError`] - Persistence errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod file;
mod memory;
mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{ObservationStore, Result, StoreError};
