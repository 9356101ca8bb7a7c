//! # chatlog-dl
//!
//! Concurrent per-month chat log downloader for OverRustleLogs-style archives.
//!
//! The archive stores one log file per calendar month per user, starting at a
//! fixed epoch. chatlog-dl fetches every month in the epoch-to-now range
//! concurrently, tracks completion across the unordered responses, and
//! reassembles the results into one chronologically ordered transcript - a
//! failed or absent month never blocks the run, it just contributes an empty
//! slot.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - the interactive binary is a thin wrapper around
//!   [`ChatlogClient`]
//! - **Event-driven** - consumers subscribe to per-month and per-run events,
//!   no polling required
//! - **Failure-contained** - per-month failures are recorded, counted, and
//!   never escalate past the aggregation run
//!
//! ## Quick Start
//!
//! ```no_run
//! use chatlog_dl::{ChatlogClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChatlogClient::new(Config::default())?;
//!
//!     // Subscribe to events
//!     let mut events = client.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {:?}", event);
//!         }
//!     });
//!
//!     let summary = client.download_user_logs("someuser").await?;
//!     println!(
//!         "Got {} out of {} months ({} lines) -> {}",
//!         summary.months_retrieved,
//!         summary.months_attempted,
//!         summary.lines_written,
//!         summary.path.display(),
//!     );
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Epoch-anchored month arithmetic
pub mod calendar;
/// Core client implementation (decomposed into focused submodules)
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Transcript assembly and persistence
pub mod transcript;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use calendar::Calendar;
pub use client::ChatlogClient;
pub use config::Config;
pub use error::{Error, Result};
pub use transcript::{TranscriptFile, TranscriptWriter};
pub use types::{CalendarDate, Event, MonthIndex, MonthResult, RunSummary};
