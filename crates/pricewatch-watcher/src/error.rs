//! Watcher error taxonomy.

use pricewatch_fetch::FetchError;
use pricewatch_notify::NotifyError;
use pricewatch_store::StoreError;
use thiserror::Error;

/// Why a check cycle, or one step of it, failed.
#[derive(Error, Debug)]
pub enum WatchError {
    /// Current prices could not be fetched. Nothing was stored or sent.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The observation store could not be written.
    #[error("Persistence failed: {0}")]
    Persistence(#[from] StoreError),

    /// An alert could not be delivered.
    #[error("Delivery failed: {0}")]
    Delivery(#[from] NotifyError),
}

impl WatchError {
    /// Returns true if the error ends the cycle.
    ///
    /// Delivery failures are reported per alert and never end a cycle.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Delivery(_))
    }
}
