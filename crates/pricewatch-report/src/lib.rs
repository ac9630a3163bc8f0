//! Reports for the pricewatch market data toolkit.
//!
//! - [`MarketSnapshot`] - Crypto and index data collected in one pass
//! - [`DailyReport`] - Markdown report and chat summary
//! - [`ReportArchive`] - Dated report files with a README index
//! - [`GithubPublisher`] - Upserts files through the GitHub contents API

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod archive;
mod github;
mod report;
mod snapshot;

pub use archive::{ArchiveError, RECENT_DAYS, ReportArchive, render_index};
pub use github::{GITHUB_API_BASE_URL, GithubPublisher, PublishError, Upsert};
pub use report::DailyReport;
pub use snapshot::{CryptoRow, MarketSnapshot};
