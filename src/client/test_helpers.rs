//! Shared helpers for client tests: a mock archive server and a client
//! whose epoch sits a few whole months in the past, so tests exercise a
//! small, predictable range regardless of the wall clock.

use crate::client::ChatlogClient;
use crate::config::Config;
use crate::types::MonthIndex;
use chrono::{Datelike, Utc};
use tempfile::TempDir;
use wiremock::MockServer;

/// Channel name used by all client tests
pub(crate) const TEST_CHANNEL: &str = "Destinygg";

/// Epoch coordinates `months_back` whole months before the current month
pub(crate) fn recent_epoch(months_back: usize) -> (i32, u32) {
    let now = Utc::now();
    let total = i64::from(now.year()) * 12 + i64::from(now.month0()) - months_back as i64;
    (
        total.div_euclid(12) as i32,
        total.rem_euclid(12) as u32,
    )
}

/// Client pointed at a fresh mock server, with `months_back + 1` months in
/// range (indices `0..=months_back`)
pub(crate) async fn create_test_client(months_back: usize) -> (ChatlogClient, MockServer, TempDir) {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let (epoch_year, epoch_month0) = recent_epoch(months_back);

    let config = Config {
        archive_url: server.uri(),
        channel: TEST_CHANNEL.to_string(),
        epoch_year,
        epoch_month0,
        output_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };
    let client = ChatlogClient::new(config).unwrap();
    (client, server, temp_dir)
}

/// Client pointed at an address nothing listens on (transport failures)
pub(crate) fn create_unreachable_client(months_back: usize) -> (ChatlogClient, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let (epoch_year, epoch_month0) = recent_epoch(months_back);

    let config = Config {
        // Discard port; connections are refused immediately.
        archive_url: "http://127.0.0.1:9".to_string(),
        channel: TEST_CHANNEL.to_string(),
        epoch_year,
        epoch_month0,
        output_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };
    let client = ChatlogClient::new(config).unwrap();
    (client, temp_dir)
}

/// Encoded URL path of the month log file at `index`, for mock matching
pub(crate) fn month_path(client: &ChatlogClient, index: usize, username: &str) -> String {
    let date = client.calendar.date_for(MonthIndex::new(index));
    format!(
        "/{TEST_CHANNEL}%20chatlog/{}%20{}/userlogs/{username}.txt",
        date.month_name(),
        date.year,
    )
}

/// URL path of the stalk lookup for `username`
pub(crate) fn stalk_path(username: &str) -> String {
    format!("/api/v1/stalk/{TEST_CHANNEL}/{username}.json")
}
