//! Existence lookup against the archive's query endpoint.

use super::ChatlogClient;
use crate::error::{Error, Result};

impl ChatlogClient {
    /// Check whether `username` has any archived activity
    ///
    /// The stalk endpoint answers with a JSON body either way: a body
    /// carrying an `error` key means no logs exist for the user, any other
    /// well-formed JSON (typically an array of recent lines) means some do.
    /// A body that is not JSON at all is propagated as
    /// [`Error::MalformedStalkResponse`], never silently treated as absent.
    pub async fn user_exists(&self, username: &str) -> Result<bool> {
        let url = format!(
            "{}/api/v1/stalk/{}/{}.json?limit={}",
            self.config.archive_base(),
            urlencoding::encode(&self.config.channel),
            urlencoding::encode(username),
            self.config.stalk_limit,
        );

        let body = self.http.get(&url).send().await?.text().await?;
        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(Error::MalformedStalkResponse)?;

        // `get` returns None for non-object bodies, so an array of lines
        // counts as existing.
        let exists = json.get("error").is_none();
        tracing::debug!(username, exists, "stalk lookup");
        Ok(exists)
    }
}
