//! Per-month log file retrieval.

use super::ChatlogClient;
use crate::error::Result;
use crate::types::{CalendarDate, MonthIndex, MonthResult};

impl ChatlogClient {
    /// Fetch one month of chat lines for `username`
    ///
    /// Always resolves to a [`MonthResult`]: a non-success status or a
    /// transport error is contained here as `ok = false` with empty text, so
    /// one bad month can never block the aggregation's completion counter.
    /// Exactly one attempt is made per index per run.
    pub(crate) async fn fetch_month(&self, username: &str, index: MonthIndex) -> MonthResult {
        let date = self.calendar.date_for(index);
        let url = self.month_log_url(username, date);

        match self.fetch_log_file(&url).await {
            Ok(Some(text)) => {
                tracing::info!(%date, index = index.get(), bytes = text.len(), "month fetched");
                MonthResult { index, text, ok: true }
            }
            Ok(None) => {
                tracing::info!(%date, index = index.get(), "no log file for month");
                MonthResult::missing(index)
            }
            Err(e) => {
                tracing::warn!(%date, index = index.get(), error = %e, "month fetch failed");
                MonthResult::missing(index)
            }
        }
    }

    /// Build the archive path for one month's user log file
    ///
    /// Format: `{base}/{Channel}%20chatlog/{Month}%20{Year}/userlogs/{user}.txt`
    /// with spaces percent-encoded in the directory segments.
    fn month_log_url(&self, username: &str, date: CalendarDate) -> String {
        let channel_dir = format!("{} chatlog", self.config.channel);
        let month_dir = format!("{} {}", date.month_name(), date.year);
        format!(
            "{}/{}/{}/userlogs/{}.txt",
            self.config.archive_base(),
            urlencoding::encode(&channel_dir),
            urlencoding::encode(&month_dir),
            urlencoding::encode(username),
        )
    }

    /// Perform the GET and accumulate the body chunk by chunk
    ///
    /// Returns `Ok(Some(text))` for a success status and `Ok(None)` for any
    /// other status. The body is drained to completion either way - the
    /// connection is never abandoned mid-stream.
    async fn fetch_log_file(&self, url: &str) -> Result<Option<String>> {
        let mut response = self.http.get(url).send().await?;
        let status = response.status();

        // The body arrives incrementally; every chunk is appended in
        // arrival order.
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
        }

        if status.is_success() {
            Ok(Some(String::from_utf8_lossy(&body).into_owned()))
        } else {
            tracing::debug!(url, status = %status, "non-success status for month log");
            Ok(None)
        }
    }
}
