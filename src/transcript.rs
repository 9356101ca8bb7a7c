//! Transcript assembly and persistence

use crate::error::Result;
use crate::types::MonthResult;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Metadata about a written transcript, returned by [`TranscriptWriter::write`]
#[derive(Clone, Debug)]
pub struct TranscriptFile {
    /// Where the transcript was written
    pub path: PathBuf,
    /// Number of newline-delimited lines written
    pub lines: usize,
}

/// Writes ordered per-month log texts to one file per username
#[derive(Clone, Debug)]
pub struct TranscriptWriter {
    output_dir: PathBuf,
}

impl TranscriptWriter {
    /// Create a writer rooted at `output_dir` (created on first write)
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Concatenate `months` in the order given into `{output_dir}/{username}.txt`
    ///
    /// The caller is responsible for ordering; months with no text (failed
    /// or empty) contribute nothing to the file. An existing transcript for
    /// the same username is overwritten.
    pub async fn write(&self, username: &str, months: &[MonthResult]) -> Result<TranscriptFile> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(format!("{username}.txt"));

        let mut file = tokio::fs::File::create(&path).await?;
        let mut lines = 0usize;
        for month in months {
            lines += month.text.bytes().filter(|b| *b == b'\n').count();
            file.write_all(month.text.as_bytes()).await?;
        }
        file.flush().await?;

        tracing::info!(path = %path.display(), lines, "transcript written");
        Ok(TranscriptFile { path, lines })
    }
}
