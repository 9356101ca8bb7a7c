//! Concurrent month fan-out and ordered reassembly.

use super::ChatlogClient;
use crate::types::{Event, MonthIndex, MonthResult};
use futures::{StreamExt, stream};

impl ChatlogClient {
    /// Fetch every month in `[0, total_months]` concurrently and return the
    /// results in chronological order
    ///
    /// Completion order is arbitrary: each result is written into the slot
    /// owned by its index, and the run finishes exactly once, when an
    /// explicit counter of resolved fetches reaches the expected total.
    /// Slot contents are never used for completion tracking - an empty text
    /// is a valid fetched state, not a pending marker.
    ///
    /// Each fetch owns its index as a plain value; no two fetches ever write
    /// the same slot, and all slot writes happen on the stream-consumer side.
    pub(crate) async fn aggregate_months(
        &self,
        username: &str,
        total_months: usize,
    ) -> Vec<MonthResult> {
        // The range is inclusive of index 0 (the epoch month itself).
        let expected = total_months + 1;
        let concurrency = self.config.max_concurrent_fetches.unwrap_or(expected).max(1);

        let mut slots: Vec<Option<MonthResult>> = vec![None; expected];
        let mut completed = 0usize;
        let mut retrieved = 0usize;

        let mut results = stream::iter((0..expected).map(MonthIndex::new))
            .map(|index| self.fetch_month(username, index))
            .buffer_unordered(concurrency);

        while let Some(result) = results.next().await {
            completed += 1;
            if result.ok {
                retrieved += 1;
            }
            self.emit_event(Event::MonthFetched {
                index: result.index,
                date: self.calendar.date_for(result.index),
                ok: result.ok,
                bytes: result.text.len(),
            });

            let slot = result.index.get();
            debug_assert!(slots[slot].is_none(), "each index resolves exactly once");
            slots[slot] = Some(result);
        }

        debug_assert_eq!(completed, expected, "every issued fetch must resolve");
        tracing::info!(
            username,
            retrieved,
            attempted = completed,
            "got {retrieved} out of {completed} possible"
        );
        self.emit_event(Event::RunComplete {
            username: username.to_string(),
            retrieved,
            attempted: completed,
        });

        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| slot.unwrap_or_else(|| MonthResult::missing(MonthIndex::new(i))))
            .collect()
    }
}
