//! Poll loop runner.
//!
//! One cycle at a time: fetch, validate, compare, notify. Every
//! recoverable error funnels through a single recovery point that turns
//! it into a chat message and keeps the loop alive.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use super::PollState;
use crate::api::{ApiError, ResponseError, StatusSource, check_response, current_date};
use crate::status::{StatusError, parse_status};
use crate::telegram::MessageSink;

/// Messages that can be sent to the poller.
#[derive(Debug, Clone)]
pub enum PollerMessage {
    /// Run a poll cycle immediately.
    TriggerPoll,
    /// Stop the poller.
    Shutdown,
}

/// Errors a single poll cycle can raise.
///
/// All variants are recoverable; the runner reports them to the chat and
/// keeps going.
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Status(#[from] StatusError),
}

/// Homework status poll loop.
pub struct StatusPoller<S, N> {
    /// Source of raw status documents.
    source: S,

    /// Notification sink.
    sink: N,

    /// Fetch window and change-detection state.
    state: PollState,

    /// Pause between poll cycles.
    poll_interval: Duration,
}

impl<S: StatusSource, N: MessageSink> StatusPoller<S, N> {
    /// Creates a poller starting its fetch window at `from_date`.
    #[must_use]
    pub fn new(source: S, sink: N, from_date: i64, poll_interval: Duration) -> Self {
        Self {
            source,
            sink,
            state: PollState::new(from_date),
            poll_interval,
        }
    }

    /// Runs the poll loop until a shutdown message arrives.
    ///
    /// The first cycle runs immediately; later ones follow the configured
    /// interval.
    pub async fn run(mut self, mut rx: mpsc::Receiver<PollerMessage>) {
        info!(
            "Status poller started, interval {} seconds",
            self.poll_interval.as_secs()
        );

        let mut timer = interval(self.poll_interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    self.poll_once().await;
                }
                msg = rx.recv() => {
                    match msg {
                        Some(PollerMessage::TriggerPoll) => {
                            debug!("Received poll trigger");
                            self.poll_once().await;
                        }
                        Some(PollerMessage::Shutdown) | None => {
                            info!("Poller shutting down");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Runs one cycle and contains its failures.
    ///
    /// This is the loop's single recovery point: any classified error from
    /// the cycle is logged and reported to the chat, never propagated. A
    /// bad cycle leaves the fetch window untouched and the loop alive.
    pub async fn poll_once(&mut self) {
        if let Err(e) = self.cycle().await {
            error!("Poll cycle failed: {e}");
            self.sink.notify(&format!("Program failure: {e}")).await;
        }
    }

    /// Fetch, validate, compare, notify, advance the window.
    async fn cycle(&mut self) -> Result<(), PollError> {
        let document = self.source.fetch(self.state.from_date()).await?;
        let homeworks = check_response(&document)?;

        let changed = self.state.note_homeworks(homeworks);
        match homeworks.first() {
            Some(record) if changed => {
                let text = parse_status(record)?;
                self.sink.notify(&text).await;
            }
            _ => debug!("No status change in this window"),
        }

        self.state.advance_window(current_date(&document));
        Ok(())
    }
}
