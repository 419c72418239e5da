//! Configuration module for the status bot.
//!
//! Handles credentials and runtime settings sourced from the process
//! environment. Configuration is loaded once at startup and passed into
//! the components that need it.

mod settings;

pub use settings::{
    BotSettings, ConfigError, Credentials, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR,
    TELEGRAM_TOKEN_VAR,
};

/// Default homework review API endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default number of seconds between poll cycles.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;
