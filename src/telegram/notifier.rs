//! Chat notifier over the Telegram Bot API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Base URL of the Telegram Bot API.
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Connection timeout for Bot API requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall timeout for Bot API requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while delivering a chat message.
///
/// These never leave the notifier; they exist for logging and tests.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network-level failure while talking to the Bot API.
    #[error("Telegram request failed: {0}")]
    Transport(String),

    /// The Bot API answered with a non-success HTTP status.
    #[error("Telegram returned status {0}")]
    HttpStatus(u16),

    /// The Bot API refused the message (`ok: false` in the envelope).
    #[error("Telegram rejected the message: {0}")]
    Rejected(String),
}

/// `sendMessage` request payload.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    description: Option<String>,
}

/// Delivers notification texts to a fixed chat.
pub struct Notifier {
    /// Underlying HTTP client.
    http: Client,

    /// Pre-built `sendMessage` method URL (embeds the bot token).
    send_url: String,

    /// Chat that receives every notification.
    chat_id: String,
}

impl Notifier {
    /// Creates a notifier for the given bot token and chat.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self, NotifyError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            send_url: format!("{TELEGRAM_API_BASE}/bot{bot_token}/sendMessage"),
            chat_id: chat_id.to_owned(),
        })
    }

    /// Delivers `text` to the configured chat.
    ///
    /// Delivery failures are logged and swallowed: the poll loop's own
    /// failure reporting runs through this method, so it must not raise.
    pub async fn notify(&self, text: &str) {
        match self.send(text).await {
            Ok(()) => debug!("Notification delivered to chat {}", self.chat_id),
            Err(e) => error!("Failed to deliver notification: {e}"),
        }
    }

    /// Performs one `sendMessage` call.
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .http
            .post(&self.send_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::HttpStatus(status.as_u16()));
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        if !envelope.ok {
            return Err(NotifyError::Rejected(
                envelope
                    .description
                    .unwrap_or_else(|| "no description".to_owned()),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // send_url embeds the bot token; keep it out of logs.
        f.debug_struct("Notifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_payload_shape() {
        let payload = SendMessage {
            chat_id: "42",
            text: "hello",
        };
        let json = serde_json::to_value(&payload).expect("payload");
        assert_eq!(json, serde_json::json!({ "chat_id": "42", "text": "hello" }));
    }

    #[test]
    fn test_envelope_decodes_failure_description() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"ok":false,"description":"Bad Request: chat not found"}"#)
                .expect("envelope");
        assert!(!envelope.ok);
        assert_eq!(
            envelope.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }

    #[test]
    fn test_debug_hides_bot_token() {
        let notifier = Notifier::new("123:secret", "42").expect("notifier");
        let rendered = format!("{notifier:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("42"));
    }
}
