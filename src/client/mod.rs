//! Core client implementation split into focused submodules.
//!
//! The `ChatlogClient` struct and its methods are organized by domain:
//! - [`stalk`] - Existence lookup against the archive's query endpoint
//! - [`fetch`] - Per-month log file retrieval
//! - [`aggregate`] - Concurrent fan-out and ordered reassembly

mod aggregate;
mod fetch;
mod stalk;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

use crate::calendar::Calendar;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::transcript::TranscriptWriter;
use crate::types::{Event, RunSummary};
use std::sync::Arc;

/// Main client instance (cloneable - shared state is Arc-wrapped)
#[derive(Clone)]
pub struct ChatlogClient {
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: Arc<Config>,
    /// HTTP client, connection-pooled across all month fetches
    pub(crate) http: reqwest::Client,
    /// Epoch-anchored month arithmetic
    pub(crate) calendar: Calendar,
    /// Transcript persistence
    pub(crate) transcript: TranscriptWriter,
    /// Event broadcast channel sender (multiple subscribers supported)
    pub(crate) event_tx: tokio::sync::broadcast::Sender<Event>,
}

impl ChatlogClient {
    /// Create a new ChatlogClient instance
    ///
    /// Validates the configuration and sets up the HTTP client and event
    /// broadcast channel. No network traffic happens until a run starts.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let calendar = Calendar::new(config.epoch_year, config.epoch_month0);
        let transcript = TranscriptWriter::new(config.output_dir.clone());

        // No per-request timeout: a run has no global deadline and every
        // in-flight month is awaited to completion.
        let http = reqwest::Client::builder()
            .user_agent(concat!("chatlog-dl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let (event_tx, _rx) = tokio::sync::broadcast::channel(256);

        Ok(Self {
            config: Arc::new(config),
            http,
            calendar,
            transcript,
            event_tx,
        })
    }

    /// Subscribe to client events
    ///
    /// Multiple subscribers are supported. Each subscriber receives all
    /// events independently; a subscriber that falls behind by more than the
    /// channel buffer receives a `RecvError::Lagged` error.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// Get the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    /// Emit an event to all subscribers
    ///
    /// If there are no active subscribers, the event is silently dropped so
    /// a run never depends on someone listening.
    pub(crate) fn emit_event(&self, event: Event) {
        self.event_tx.send(event).ok();
    }

    /// Download every archived month of chat lines for `username`
    ///
    /// Runs the full pipeline: existence gate, month range computation,
    /// concurrent per-month fetch with ordered reassembly, and transcript
    /// persistence. Individual month failures are contained within the run;
    /// only a failed existence check, an impossible epoch, or an I/O error
    /// while persisting surfaces as an error.
    pub async fn download_user_logs(&self, username: &str) -> Result<RunSummary> {
        validate_username(username)?;

        if !self.user_exists(username).await? {
            return Err(Error::UserNotFound(username.to_string()));
        }

        let total_months = self.calendar.total_months()?;
        tracing::info!(username, months = total_months + 1, "starting aggregation run");

        let months = self.aggregate_months(username, total_months).await;
        let months_attempted = months.len();
        let months_retrieved = months.iter().filter(|m| m.ok).count();

        let file = self.transcript.write(username, &months).await?;
        self.emit_event(Event::TranscriptWritten {
            username: username.to_string(),
            path: file.path.clone(),
            lines: file.lines,
        });

        Ok(RunSummary {
            username: username.to_string(),
            months_attempted,
            months_retrieved,
            lines_written: file.lines,
            path: file.path,
        })
    }

    /// Probe the archive host (used by the interactive `test` command)
    ///
    /// Any HTTP response counts as reachable; only transport failures error.
    pub async fn check_archive_reachable(&self) -> Result<()> {
        let response = self.http.get(self.config.archive_base()).send().await?;
        tracing::debug!(status = %response.status(), "archive probe");
        Ok(())
    }
}

/// Reject usernames the archive never serves before any traffic is sent
///
/// Archive usernames are plain identifiers; anything else would end up
/// embedded in a URL path and a local file name.
fn validate_username(username: &str) -> Result<()> {
    let valid = !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(Error::InvalidUsername(username.to_string()));
    }
    Ok(())
}
