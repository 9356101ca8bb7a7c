//! Error types for chatlog-dl
//!
//! Per-month fetch failures are deliberately *not* represented here: a bad
//! month is contained inside the aggregation run as a failed
//! [`MonthResult`](crate::types::MonthResult) and never escalates. Only
//! conditions that abort a run before or after aggregation surface as
//! [`Error`] values.

use thiserror::Error;

/// Result type alias for chatlog-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for chatlog-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "archive_url")
        key: Option<String>,
    },

    /// Username is empty or contains characters the archive never serves
    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    /// The existence lookup reported no archived activity for the username
    #[error("user not found in archive: {0}")]
    UserNotFound(String),

    /// The configured epoch lies after the current calendar month
    #[error(
        "archive epoch ({epoch_year}-{epoch_month:02}) is after the current month ({now_year}-{now_month:02})"
    )]
    EpochInFuture {
        /// Configured epoch year
        epoch_year: i32,
        /// Configured epoch month (1-based, for readability)
        epoch_month: u32,
        /// Current year
        now_year: i32,
        /// Current month (1-based)
        now_month: u32,
    },

    /// The existence lookup returned a body that is not valid JSON
    ///
    /// This is fatal to that single lookup; aggregation has not started at
    /// this point, so no run state is affected.
    #[error("malformed stalk response: {0}")]
    MalformedStalkResponse(#[source] serde_json::Error),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
