//! Whole-pipeline tests against a mock archive server, using only the
//! public API.

use chatlog_dl::{Calendar, ChatlogClient, Config, Error, Event, MonthIndex};
use chrono::{Datelike, Utc};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHANNEL: &str = "Destinygg";

/// Epoch a fixed number of whole months back, so the fetch range is small
/// and predictable regardless of the wall clock.
fn recent_epoch(months_back: usize) -> (i32, u32) {
    let now = Utc::now();
    let total = i64::from(now.year()) * 12 + i64::from(now.month0()) - months_back as i64;
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32)
}

async fn mock_client(months_back: usize) -> (ChatlogClient, Calendar, MockServer, TempDir) {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let (epoch_year, epoch_month0) = recent_epoch(months_back);

    let config = Config {
        archive_url: server.uri(),
        channel: CHANNEL.to_string(),
        epoch_year,
        epoch_month0,
        output_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };
    let client = ChatlogClient::new(config).unwrap();
    let calendar = Calendar::new(epoch_year, epoch_month0);
    (client, calendar, server, temp_dir)
}

fn month_path(calendar: &Calendar, index: usize, username: &str) -> String {
    let date = calendar.date_for(MonthIndex::new(index));
    format!(
        "/{CHANNEL}%20chatlog/{}%20{}/userlogs/{username}.txt",
        date.month_name(),
        date.year,
    )
}

fn stalk_path(username: &str) -> String {
    format!("/api/v1/stalk/{CHANNEL}/{username}.json")
}

#[tokio::test]
async fn full_pipeline_assembles_chronological_transcript() {
    let (client, calendar, server, temp_dir) = mock_client(3).await;

    Mock::given(method("GET"))
        .and(path(stalk_path("someuser")))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"text":"hi"}]"#))
        .mount(&server)
        .await;

    // All four months exist; delays reverse the arrival order relative to
    // the chronological order the transcript must come out in.
    let delays_ms = [90u64, 60, 30, 0];
    for (index, delay) in delays_ms.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(month_path(&calendar, index, "someuser")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("line from month {index}\n"))
                    .set_delay(Duration::from_millis(*delay)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut events = client.subscribe();
    let summary = client.download_user_logs("someuser").await.unwrap();

    assert_eq!(summary.months_attempted, 4);
    assert_eq!(summary.months_retrieved, 4);
    assert_eq!(summary.lines_written, 4);

    let written = std::fs::read_to_string(temp_dir.path().join("someuser.txt")).unwrap();
    assert_eq!(
        written,
        "line from month 0\nline from month 1\nline from month 2\nline from month 3\n",
        "output order must be chronological, not arrival order"
    );

    // Event stream: four fetches, one completion, one transcript.
    let mut fetched = 0;
    let mut complete = 0;
    let mut transcript = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            Event::MonthFetched { .. } => fetched += 1,
            Event::RunComplete { retrieved, attempted, .. } => {
                complete += 1;
                assert_eq!((retrieved, attempted), (4, 4));
            }
            Event::TranscriptWritten { lines, .. } => {
                transcript += 1;
                assert_eq!(lines, 4);
            }
        }
    }
    assert_eq!((fetched, complete, transcript), (4, 1, 1));
}

#[tokio::test]
async fn unknown_user_aborts_before_aggregation() {
    let (client, _calendar, server, temp_dir) = mock_client(3).await;

    Mock::given(method("GET"))
        .and(path(stalk_path("ghostuser")))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error":"no logs"}"#))
        .mount(&server)
        .await;

    match client.download_user_logs("ghostuser").await {
        Err(Error::UserNotFound(name)) => assert_eq!(name, "ghostuser"),
        other => panic!("expected UserNotFound, got: {:?}", other),
    }
    assert!(
        !temp_dir.path().join("ghostuser.txt").exists(),
        "no transcript is written for an unknown user"
    );
}

#[tokio::test]
async fn run_with_only_failures_still_writes_an_empty_transcript() {
    let (client, _calendar, server, temp_dir) = mock_client(2).await;

    Mock::given(method("GET"))
        .and(path(stalk_path("someuser")))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;
    // All month fetches hit the default 404.

    let summary = client.download_user_logs("someuser").await.unwrap();

    assert_eq!(summary.months_attempted, 3);
    assert_eq!(summary.months_retrieved, 0);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("someuser.txt")).unwrap(),
        "",
        "the summary and file are produced even when N = 0"
    );
}
