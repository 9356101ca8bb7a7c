//! Configuration types for chatlog-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for [`ChatlogClient`](crate::ChatlogClient)
///
/// Every field has a sensible default matching the public OverRustleLogs
/// deployment, so `Config::default()` works out of the box. All fields are
/// individually defaultable when deserialized from a partial JSON file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the log archive (default: "https://overrustlelogs.net")
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// Channel whose logs are archived (default: "Destinygg")
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Year of the earliest archived month (default: 2013)
    #[serde(default = "default_epoch_year")]
    pub epoch_year: i32,

    /// Zero-based month of the earliest archived month (default: 11 = December)
    #[serde(default = "default_epoch_month0")]
    pub epoch_month0: u32,

    /// Directory transcripts are written to (default: "./logs")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Cap on concurrent month fetches (None = fetch every month at once)
    ///
    /// The default mirrors the archive's intended usage: one request per
    /// month, all in flight simultaneously. Setting a cap bounds in-flight
    /// parallelism only; completion accounting and result ordering are
    /// unaffected.
    #[serde(default)]
    pub max_concurrent_fetches: Option<usize>,

    /// `limit` query parameter sent with the existence lookup (default: 1)
    #[serde(default = "default_stalk_limit")]
    pub stalk_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_url: default_archive_url(),
            channel: default_channel(),
            epoch_year: default_epoch_year(),
            epoch_month0: default_epoch_month0(),
            output_dir: default_output_dir(),
            max_concurrent_fetches: None,
            stalk_limit: default_stalk_limit(),
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// Checks that the archive URL parses, the channel is non-empty, the
    /// epoch month is a real month, and numeric settings are usable.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.archive_url).map_err(|e| Error::Config {
            message: format!("invalid archive URL '{}': {}", self.archive_url, e),
            key: Some("archive_url".to_string()),
        })?;

        if self.channel.trim().is_empty() {
            return Err(Error::Config {
                message: "channel must not be empty".to_string(),
                key: Some("channel".to_string()),
            });
        }

        if self.epoch_month0 >= 12 {
            return Err(Error::Config {
                message: format!(
                    "epoch_month0 must be in 0..12, got {}",
                    self.epoch_month0
                ),
                key: Some("epoch_month0".to_string()),
            });
        }

        if self.max_concurrent_fetches == Some(0) {
            return Err(Error::Config {
                message: "max_concurrent_fetches must be at least 1 when set".to_string(),
                key: Some("max_concurrent_fetches".to_string()),
            });
        }

        if self.stalk_limit == 0 {
            return Err(Error::Config {
                message: "stalk_limit must be at least 1".to_string(),
                key: Some("stalk_limit".to_string()),
            });
        }

        Ok(())
    }

    /// Archive base URL without a trailing slash, ready for path joining
    pub(crate) fn archive_base(&self) -> &str {
        self.archive_url.trim_end_matches('/')
    }
}

fn default_archive_url() -> String {
    "https://overrustlelogs.net".to_string()
}

fn default_channel() -> String {
    "Destinygg".to_string()
}

fn default_epoch_year() -> i32 {
    2013
}

fn default_epoch_month0() -> u32 {
    11
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_stalk_limit() -> u32 {
    1
}
