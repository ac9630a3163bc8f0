//! Telegram Bot API delivery.

use async_trait::async_trait;
use pricewatch_fetch::HttpClient;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Notifier, NotifyError};

/// Base URL of the Telegram Bot API.
pub const TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

/// Credentials and destination for a Telegram bot.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    pub bot_token: String,
    /// Destination chat id.
    pub chat_id: String,
    /// API base URL.
    pub api_base: String,
}

impl TelegramConfig {
    /// Creates a config against the public Bot API.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotConfigured`] if the token or chat id is blank.
    pub fn new(
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let bot_token = bot_token.into();
        let chat_id = chat_id.into();

        if bot_token.trim().is_empty() {
            return Err(NotifyError::NotConfigured("bot token is empty"));
        }
        if chat_id.trim().is_empty() {
            return Err(NotifyError::NotConfigured("chat id is empty"));
        }

        Ok(Self {
            bot_token,
            chat_id,
            api_base: TELEGRAM_API_BASE_URL.to_string(),
        })
    }

    /// Sets a custom API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Returns the `sendMessage` endpoint URL.
    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Sends Markdown messages to a Telegram chat.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    http: HttpClient,
    config: TelegramConfig,
}

#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    /// Creates a notifier.
    #[must_use]
    pub const fn new(http: HttpClient, config: TelegramConfig) -> Self {
        Self { http, config }
    }

    /// Returns the destination chat id.
    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.config.chat_id
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let params = [
            ("chat_id", self.config.chat_id.as_str()),
            ("text", message),
            ("parse_mode", "Markdown"),
        ];

        let response = self
            .http
            .inner()
            .post(self.config.send_message_url())
            .form(&params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        let reply = serde_json::from_str::<ApiReply>(&body).ok();

        if status.is_success() && reply.as_ref().is_none_or(|r| r.ok) {
            debug!(chat_id = %self.config.chat_id, "telegram message delivered");
            return Ok(());
        }

        let description = reply
            .and_then(|r| r.description)
            .unwrap_or_else(|| body.trim().chars().take(200).collect());
        warn!(status = status.as_u16(), %description, "telegram rejected message");

        Err(NotifyError::Rejected {
            status: status.as_u16(),
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Answers one request with `status` and `body`, returning the raw request.
    async fn reply_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            request
        });

        (base, server)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|len| len.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + body_len {
                break;
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn notifier_at(base: &str) -> TelegramNotifier {
        let config = TelegramConfig::new("123:secret", "42")
            .unwrap()
            .with_api_base(base);
        TelegramNotifier::new(HttpClient::with_defaults().unwrap(), config)
    }

    #[test]
    fn test_config_rejects_blank_credentials() {
        assert!(matches!(
            TelegramConfig::new("", "123"),
            Err(NotifyError::NotConfigured(_))
        ));
        assert!(matches!(
            TelegramConfig::new("token", "  "),
            Err(NotifyError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_send_message_url() {
        let config = TelegramConfig::new("123:abc", "42")
            .unwrap()
            .with_api_base("http://localhost:8081/");
        assert_eq!(
            config.send_message_url(),
            "http://localhost:8081/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = TelegramConfig::new("123:secret", "42").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("42"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_http_error_without_token() {
        let config = TelegramConfig::new("123:secret", "42")
            .unwrap()
            .with_api_base("http://127.0.0.1:9");
        let notifier = TelegramNotifier::new(HttpClient::with_defaults().unwrap(), config);

        let err = notifier.notify("hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::Http(_)));
        assert!(!err.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_delivered_message_posts_markdown_form() {
        let (base, server) = reply_once(200, r#"{"ok":true,"result":{}}"#).await;

        notifier_at(&base).notify("hello").await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /bot123:secret/sendMessage "));
        assert!(request.contains("chat_id=42"));
        assert!(request.contains("text=hello"));
        assert!(request.contains("parse_mode=Markdown"));
    }

    #[tokio::test]
    async fn test_error_status_is_rejected_with_description() {
        let (base, server) = reply_once(
            400,
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .await;

        let err = notifier_at(&base).notify("hello").await.unwrap_err();
        server.await.unwrap();

        match err {
            NotifyError::Rejected {
                status,
                description,
            } => {
                assert_eq!(status, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ok_false_is_rejected_despite_success_status() {
        let (base, server) =
            reply_once(200, r#"{"ok":false,"description":"Forbidden: bot was blocked"}"#).await;

        let err = notifier_at(&base).notify("hello").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(
            err,
            NotifyError::Rejected { status: 200, ref description }
                if description == "Forbidden: bot was blocked"
        ));
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_kept() {
        let (base, server) = reply_once(502, "Bad Gateway").await;

        let err = notifier_at(&base).notify("hello").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(
            err,
            NotifyError::Rejected { status: 502, ref description } if description == "Bad Gateway"
        ));
    }
}
