//! Output capture: a writer that fans out to the terminal and a transcript.

use std::io::{self, Write};
use std::sync::LazyLock;

use regex::Regex;

/// SGR escape sequences emitted by `colored`.
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI escape pattern is valid"));

/// Removes terminal color sequences from `text`.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Writes every byte to both `primary` and `secondary`.
#[derive(Debug)]
pub struct TeeWriter<A, B> {
    primary: A,
    secondary: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    /// Pairs two sinks.
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Both sinks must see the same bytes, so the primary's partial writes
        // decide how much the secondary receives.
        let written = self.primary.write(buf)?;
        self.secondary.write_all(&buf[..written])?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

/// In-memory record of everything rendered during one lookup.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    buf: Vec<u8>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured text with color sequences removed.
    pub fn text(&self) -> String {
        strip_ansi(&String::from_utf8_lossy(&self.buf))
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
