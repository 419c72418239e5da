//! Homework Status Bot - Main Entry Point
//!
//! Polls the homework review API on a fixed interval and relays status
//! changes for the tracked submission to a single Telegram chat.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use homework_status_bot::api::ApiClient;
use homework_status_bot::config::{BotSettings, Credentials};
use homework_status_bot::poller::{PollerMessage, StatusPoller};
use homework_status_bot::telegram::Notifier;

/// Telegram bot relaying homework review status updates.
#[derive(Parser, Debug)]
#[command(name = "homework_bot")]
#[command(about = "Relay homework review status changes to a Telegram chat")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Missing credentials are fatal here; the poll loop never starts
    // without a complete set.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("Refusing to start: {e}");
            return Err(e).context("Credential check failed");
        }
    };

    let settings = BotSettings::from_env_with_defaults();
    info!(
        "Polling {} every {} seconds",
        settings.endpoint, settings.poll_interval_secs
    );

    let api = ApiClient::new(&settings.endpoint, &credentials.api_token)
        .context("Failed to build the review API client")?;

    let notifier = Notifier::new(&credentials.bot_token, &credentials.chat_id)
        .context("Failed to build the Telegram notifier")?;

    let poller = StatusPoller::new(
        api,
        notifier,
        Utc::now().timestamp(),
        Duration::from_secs(settings.poll_interval_secs),
    );

    // Create poller channel
    let (poller_tx, poller_rx) = mpsc::channel::<PollerMessage>(8);

    // Spawn poller task
    let poller_handle = tokio::spawn(async move {
        poller.run(poller_rx).await;
    });

    info!("Bot is running. Use Ctrl+C to stop.");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    // Cleanup
    info!("Received Ctrl+C, shutting down...");
    let _ = poller_tx.send(PollerMessage::Shutdown).await;
    let _ = poller_handle.await;

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
