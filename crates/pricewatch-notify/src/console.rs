//! Standard output delivery.

use async_trait::async_trait;
use std::io::Write;

use crate::{Notifier, NotifyError};

/// Prints messages to stdout, one block per message.
///
/// Used for dry runs and when no chat credentials are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Creates a console notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{message}")?;
        writeln!(stdout)?;
        stdout.flush()?;
        Ok(())
    }
}
