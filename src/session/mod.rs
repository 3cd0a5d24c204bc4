//! The interactive lookup session.
//!
//! The session alternates between prompting for a domain and looking it up:
//! every record type in [`RECORD_TYPES`] is queried in order, then WHOIS, with
//! all rendered output captured into a [`Transcript`] the user may save.
//! Lookups never overlap and no state is shared between them.

mod prompt;
mod report;
mod save;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{DEFAULT_OUTPUT_FILE, QUIT_SENTINEL, RECORD_TYPES};
use crate::dns::{LookupOutcome, RecordLookup};
use crate::output::{print_closing, print_opening, Category, Renderer, TeeWriter, Transcript};
use crate::whois::WhoisSource;
use prompt::{ask, is_yes};

pub use save::{Clock, LocalClock};

const DOMAIN_PROMPT: &str = "Enter a website to look up (or 'q' to quit): ";
const SAVE_PROMPT: &str = "Do you want to save the output to a file? (y/n) ";
const CONTINUE_PROMPT: &str = "Do you want to look up another website? (y/n) ";

/// What happened during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Domains looked up
    pub lookups: usize,
    /// Transcript files written, in order
    pub saved: Vec<PathBuf>,
}

enum State {
    Prompting,
    LookingUp(String),
    Done,
}

/// Interactive lookup loop over a DNS source, a WHOIS source and a clock.
pub struct Session<L, H, C = LocalClock> {
    resolver: L,
    whois: H,
    clock: C,
    renderer: Renderer,
    default_output: PathBuf,
    banners: bool,
}

impl<L, H, C> Session<L, H, C>
where
    L: RecordLookup,
    H: WhoisSource,
    C: Clock,
{
    /// Creates a session saving to `DNS_LOOKUP.txt` by default, with banners.
    pub fn new(resolver: L, whois: H, clock: C, renderer: Renderer) -> Self {
        Self {
            resolver,
            whois,
            clock,
            renderer,
            default_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            banners: true,
        }
    }

    /// Sets the file offered at the save prompt.
    pub fn with_default_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_output = path.into();
        self
    }

    /// Enables or disables the opening and closing banners.
    pub fn with_banners(mut self, banners: bool) -> Self {
        self.banners = banners;
        self
    }

    /// Runs the loop until the user quits, declines to continue, or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only for terminal or file I/O failures; DNS and WHOIS
    /// problems are rendered (or skipped) and never end the session.
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        if self.banners {
            print_opening(&self.renderer, &mut out)?;
        }

        let mut state = State::Prompting;
        loop {
            state = match state {
                State::Prompting => {
                    let answer = ask(&self.renderer, &mut input, &mut out, DOMAIN_PROMPT)
                        .context("Failed to read domain")?;
                    match answer {
                        None => State::Done,
                        Some(a) if a.eq_ignore_ascii_case(QUIT_SENTINEL) => State::Done,
                        Some(a) if a.is_empty() => State::Prompting,
                        Some(domain) => State::LookingUp(domain),
                    }
                }
                State::LookingUp(domain) => {
                    let transcript = self.lookup(&domain, &mut out).await?;
                    summary.lookups += 1;

                    if let Some(path) = self.offer_save(&domain, &transcript, &mut input, &mut out)? {
                        summary.saved.push(path);
                    }

                    self.renderer.blank(&mut out)?;
                    let again = ask(&self.renderer, &mut input, &mut out, CONTINUE_PROMPT)
                        .context("Failed to read answer")?;
                    if is_yes(again.as_deref()) {
                        State::Prompting
                    } else {
                        State::Done
                    }
                }
                State::Done => break,
            };
        }

        if self.banners {
            print_closing(&self.renderer, &mut out)?;
        }
        log::debug!(
            "Session finished: {} lookup(s), {} file(s) saved",
            summary.lookups,
            summary.saved.len()
        );
        Ok(summary)
    }

    /// Looks up one domain, rendering to `out` and returning what was rendered.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing to `out` fails.
    pub async fn lookup<W: Write>(&self, domain: &str, out: &mut W) -> io::Result<Transcript> {
        let mut transcript = Transcript::new();
        {
            let mut tee = TeeWriter::new(&mut *out, &mut transcript);
            self.renderer
                .line(&mut tee, Category::Info, &format!("Looking up {domain}..."))?;

            for record_type in RECORD_TYPES {
                // Every other outcome is an expected absence
                if let LookupOutcome::Found(records) = self.resolver.query(domain, record_type).await
                {
                    report::render_records(&self.renderer, &mut tee, domain, record_type, &records)?;
                }
            }

            let whois = self.whois.fetch(domain).await;
            report::render_whois(&self.renderer, &mut tee, domain, &whois)?;
        }
        Ok(transcript)
    }

    /// Asks whether to save and where, then writes the transcript.
    fn offer_save<R: BufRead, W: Write>(
        &self,
        domain: &str,
        transcript: &Transcript,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<PathBuf>> {
        let answer = ask(&self.renderer, input, out, SAVE_PROMPT).context("Failed to read answer")?;
        if !is_yes(answer.as_deref()) {
            return Ok(None);
        }

        let question = format!(
            "Enter a filename or press Enter to use the default ({}): ",
            self.default_output.display()
        );
        let path = match ask(&self.renderer, input, out, &question)
            .context("Failed to read filename")?
        {
            Some(name) if !name.is_empty() => PathBuf::from(name),
            _ => self.default_output.clone(),
        };

        save::save_transcript(&path, domain, self.clock.now(), transcript)?;
        self.renderer
            .line(out, Category::Info, &format!("Output saved to {}", path.display()))?;
        Ok(Some(path))
    }
}
