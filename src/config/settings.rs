//! Credentials and application settings.

use super::{DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL_SECS};

/// Environment variable holding the review API OAuth token.
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the notification chat identifier.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Credentials for the review API and the notification chat.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth token for the homework review API.
    pub api_token: String,

    /// Telegram bot token.
    pub bot_token: String,

    /// Identifier of the chat that receives notifications.
    pub chat_id: String,
}

impl Credentials {
    /// Builds credentials, rejecting missing or empty values.
    ///
    /// Every missing credential is reported in one error so a broken
    /// environment can be fixed in a single pass.
    ///
    /// # Errors
    ///
    /// Returns an error naming each credential that is absent or empty.
    pub fn from_parts(
        api_token: String,
        bot_token: String,
        chat_id: String,
    ) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        if api_token.is_empty() {
            missing.push(PRACTICUM_TOKEN_VAR);
        }
        if bot_token.is_empty() {
            missing.push(TELEGRAM_TOKEN_VAR);
        }
        if chat_id.is_empty() {
            missing.push(TELEGRAM_CHAT_ID_VAR);
        }

        if missing.is_empty() {
            Ok(Self {
                api_token,
                bot_token,
                chat_id,
            })
        } else {
            Err(ConfigError::MissingCredentials(missing))
        }
    }

    /// Reads credentials from the process environment.
    ///
    /// Expects `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID`
    /// to be set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the variables is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env_or_empty(PRACTICUM_TOKEN_VAR),
            env_or_empty(TELEGRAM_TOKEN_VAR),
            env_or_empty(TELEGRAM_CHAT_ID_VAR),
        )
    }
}

/// Reads a variable, treating an unset one as empty.
fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Bot-specific settings.
#[derive(Debug, Clone)]
pub struct BotSettings {
    /// Review API endpoint.
    pub endpoint: String,

    /// Seconds between poll cycles.
    pub poll_interval_secs: u64,

    /// Log level for the application.
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            log_level: default_log_level(),
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self {
            endpoint: std::env::var("REVIEW_API_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned()),
            // A zero interval would make the poll timer panic.
            poll_interval_secs: std::env::var("POLL_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BotSettings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.poll_interval_secs, 600);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_credentials_from_parts() {
        let credentials =
            Credentials::from_parts("api".to_owned(), "bot".to_owned(), "42".to_owned())
                .expect("credentials");
        assert_eq!(credentials.api_token, "api");
        assert_eq!(credentials.bot_token, "bot");
        assert_eq!(credentials.chat_id, "42");
    }

    #[test]
    fn test_credentials_reject_empty_chat_id() {
        let result =
            Credentials::from_parts("api".to_owned(), "bot".to_owned(), String::new());
        let Err(ConfigError::MissingCredentials(missing)) = result else {
            panic!("expected a missing-credentials error");
        };
        assert_eq!(missing, vec![TELEGRAM_CHAT_ID_VAR]);
    }

    #[test]
    fn test_credentials_report_every_missing_value() {
        let result = Credentials::from_parts(String::new(), String::new(), String::new());
        let Err(ConfigError::MissingCredentials(missing)) = result else {
            panic!("expected a missing-credentials error");
        };
        assert_eq!(
            missing,
            vec![PRACTICUM_TOKEN_VAR, TELEGRAM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR]
        );
    }
}
