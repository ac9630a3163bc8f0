//! Alert delivery for the pricewatch market data toolkit.
//!
//! - [`Notifier`] - Delivery interface (one attempt, no retry)
//! - [`TelegramNotifier`] - Telegram Bot API `sendMessage`
//! - [`ConsoleNotifier`] - Prints messages to stdout
//! - [`AlertMessage`] - Price alert text

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/pricewatch-rs/pricewatch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod message;
mod notifier;
mod telegram;

pub use console::ConsoleNotifier;
pub use message::AlertMessage;
pub use notifier::{Notifier, NotifyError};
pub use telegram::{TELEGRAM_API_BASE_URL, TelegramConfig, TelegramNotifier};
