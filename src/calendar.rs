//! Epoch-anchored month arithmetic
//!
//! The archive stores one log file per calendar month, starting at a fixed
//! epoch. This module translates between the linear month offset the
//! aggregation runs over and the (year, month) coordinates the archive
//! embeds in its paths. The mapping is a pure bijection within
//! `[epoch, now]`.

use crate::error::{Error, Result};
use crate::types::{CalendarDate, MonthIndex};
use chrono::{DateTime, Datelike, Utc};

/// Month range calculator anchored at the archive epoch
#[derive(Clone, Copy, Debug)]
pub struct Calendar {
    epoch_year: i32,
    epoch_month0: u32,
}

impl Calendar {
    /// Create a calendar anchored at the given epoch
    ///
    /// `epoch_month0` is zero-based; values are assumed to have passed
    /// [`Config::validate`](crate::Config::validate).
    pub fn new(epoch_year: i32, epoch_month0: u32) -> Self {
        Self {
            epoch_year,
            epoch_month0,
        }
    }

    /// Inclusive upper bound of the month range to fetch, as of the wall clock
    ///
    /// Recomputed at call time; a long-lived client picks up newly started
    /// months automatically.
    pub fn total_months(&self) -> Result<usize> {
        self.total_months_at(Utc::now())
    }

    /// Inclusive upper bound of the month range to fetch, as of `now`
    ///
    /// Computed as `12*(now_year - epoch_year) + (now_month - epoch_month)`.
    /// Errors if the epoch lies after the current month; the range always
    /// starts at index 0, so a negative bound would mean nothing to fetch
    /// and a run that could never complete.
    pub fn total_months_at(&self, now: DateTime<Utc>) -> Result<usize> {
        let months = 12 * i64::from(now.year() - self.epoch_year)
            + (i64::from(now.month0()) - i64::from(self.epoch_month0));
        if months < 0 {
            return Err(Error::EpochInFuture {
                epoch_year: self.epoch_year,
                epoch_month: self.epoch_month0 + 1,
                now_year: now.year(),
                now_month: now.month(),
            });
        }
        Ok(months as usize)
    }

    /// Calendar coordinates of the month at `index`
    ///
    /// Pure and total for any index; indices before the epoch are never
    /// requested by construction since the fetch range starts at 0.
    pub fn date_for(&self, index: MonthIndex) -> CalendarDate {
        let offset = index.get() + self.epoch_month0 as usize;
        CalendarDate {
            year: self.epoch_year + (offset / 12) as i32,
            month0: (offset % 12) as u32,
        }
    }

    /// Inverse of [`date_for`](Self::date_for)
    ///
    /// Returns `None` for months strictly before the epoch.
    pub fn index_for(&self, year: i32, month0: u32) -> Option<MonthIndex> {
        let months = 12 * i64::from(year - self.epoch_year)
            + (i64::from(month0) - i64::from(self.epoch_month0));
        (months >= 0).then(|| MonthIndex::new(months as usize))
    }
}
