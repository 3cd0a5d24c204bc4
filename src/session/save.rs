//! Saving a lookup transcript to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};

use crate::config::TIMESTAMP_FORMAT;
use crate::output::Transcript;

/// Source of the timestamp written into saved transcripts.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Full file contents: header line, blank line, transcript.
pub(crate) fn transcript_file_contents(
    domain: &str,
    timestamp: NaiveDateTime,
    transcript: &Transcript,
) -> String {
    format!(
        "Output for {domain} on {}:\n\n{}",
        timestamp.format(TIMESTAMP_FORMAT),
        transcript.text()
    )
}

/// Writes the transcript for `domain` to `path`, replacing any existing file.
pub(crate) fn save_transcript(
    path: &Path,
    domain: &str,
    timestamp: NaiveDateTime,
    transcript: &Transcript,
) -> Result<()> {
    let contents = transcript_file_contents(domain, timestamp, transcript);
    fs::write(path, contents)
        .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
    log::info!("Saved transcript for {domain} to {}", path.display());
    Ok(())
}
