//! Shared HTTP client for quote, chat and repository APIs.

use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use thiserror::Error;

/// Longest response body excerpt kept in error messages.
const BODY_EXCERPT_LEN: usize = 200;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout. A timed-out call fails; it is never retried.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("pricewatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching quotes.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Start of the response body.
        body: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed but carried no usable quote.
    #[error("No data for {0}")]
    NoData(String),
}

/// HTTP client with a fixed timeout policy.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying `reqwest` client for building requests.
    #[must_use]
    pub const fn inner(&self) -> &Client {
        &self.client
    }

    /// Sends a request once and returns the body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-2xx responses and
    /// [`FetchError::Http`] for transport failures.
    pub async fn send_text(&self, request: RequestBuilder) -> Result<String, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        Ok(body)
    }
}

/// Truncates a body to a short single-line excerpt.
pub(crate) fn excerpt(body: &str) -> String {
    let line = body.trim().replace('\n', " ");
    match line.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &line[..idx]),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("pricewatch/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_excerpt_truncates() {
        let long = "x".repeat(500);
        let short = excerpt(&long);
        assert_eq!(short.len(), BODY_EXCERPT_LEN + 3);
        assert!(short.ends_with("..."));

        assert_eq!(excerpt(" {\"ok\":false}\n"), "{\"ok\":false}");
    }
}
