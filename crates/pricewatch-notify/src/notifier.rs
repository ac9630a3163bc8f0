//! The delivery interface.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while delivering a message.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// HTTP request failed. The URL is stripped so credentials never leak.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The messaging API refused the message.
    #[error("Message rejected ({status}): {description}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Description returned by the API.
        description: String,
    },

    /// Required credentials are missing.
    #[error("Notifier not configured: {0}")]
    NotConfigured(&'static str),

    /// Writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Delivers a formatted message to a destination fixed at construction.
///
/// Delivery is attempted once; callers decide what a failure means.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be delivered.
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

#[async_trait]
impl<N: Notifier + ?Sized> Notifier for Box<N> {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        (**self).notify(message).await
    }
}
