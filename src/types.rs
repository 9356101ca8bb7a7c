//! Core types for chatlog-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// English month names as they appear in archive directory paths
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zero-based offset of a calendar month relative to the archive epoch
///
/// Index 0 is the epoch month itself; the index increases by 1 per calendar
/// month and is bijective with [`CalendarDate`] within `[epoch, now]`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MonthIndex(pub usize);

impl MonthIndex {
    /// Create a new MonthIndex
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the inner usize value
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for MonthIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<MonthIndex> for usize {
    fn from(index: MonthIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MonthIndex {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Calendar coordinates of one archive month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Calendar year
    pub year: i32,
    /// Zero-based month of year (0 = January, 11 = December)
    pub month0: u32,
}

impl CalendarDate {
    /// English name of the month, as used in archive paths
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize % 12]
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Outcome of one per-month fetch attempt
///
/// Produced exactly once per index per run and immutable afterwards. A
/// month that failed (non-success status or transport error) carries
/// `ok = false` and an empty text; a month that succeeded with no lines
/// carries `ok = true` and an empty text. The two are distinguished by the
/// flag, never by content inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthResult {
    /// The month this result belongs to
    pub index: MonthIndex,
    /// Full log text for the month (possibly empty)
    pub text: String,
    /// Whether the fetch succeeded
    pub ok: bool,
}

impl MonthResult {
    /// Result for a month that failed or has no log file
    pub fn missing(index: MonthIndex) -> Self {
        Self {
            index,
            text: String::new(),
            ok: false,
        }
    }
}

/// Events emitted over the client's broadcast channel
///
/// Multiple subscribers are supported; each receives all events
/// independently.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum Event {
    /// One per-month fetch resolved (successfully or not)
    MonthFetched {
        /// Epoch-relative index of the month
        index: MonthIndex,
        /// Calendar coordinates of the month
        date: CalendarDate,
        /// Whether the fetch succeeded
        ok: bool,
        /// Size of the fetched text in bytes
        bytes: usize,
    },

    /// All outstanding fetches of a run have resolved
    RunComplete {
        /// Username the run was for
        username: String,
        /// Number of months fetched successfully
        retrieved: usize,
        /// Number of months attempted (always the full range)
        attempted: usize,
    },

    /// The assembled transcript was persisted
    TranscriptWritten {
        /// Username the transcript belongs to
        username: String,
        /// Where the transcript was written
        path: PathBuf,
        /// Number of newline-delimited lines written
        lines: usize,
    },
}

/// Summary of one completed download run
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    /// Username the run was for
    pub username: String,
    /// Number of months attempted (the full epoch-to-now range)
    pub months_attempted: usize,
    /// Number of months fetched successfully
    pub months_retrieved: usize,
    /// Number of newline-delimited lines written to the transcript
    pub lines_written: usize,
    /// Where the transcript was written
    pub path: PathBuf,
}
