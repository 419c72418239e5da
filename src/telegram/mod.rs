//! Telegram delivery module.
//!
//! Sends plain-text notifications to a single chat through the Bot API.

mod notifier;

pub use notifier::{Notifier, NotifyError};

use async_trait::async_trait;

/// Sink for outgoing notification texts.
///
/// Implementations must contain their own failures: the poll loop reports
/// its errors through this seam and cannot survive one that panics or
/// propagates.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Delivers `text` to the chat.
    async fn notify(&self, text: &str);
}

#[async_trait]
impl MessageSink for Notifier {
    async fn notify(&self, text: &str) {
        Notifier::notify(self, text).await;
    }
}
