//! dns_lookup library: interactive DNS and WHOIS lookups
//!
//! For each domain the user enters, the session queries A, AAAA, MX, SOA and
//! CNAME records in that order, prints whichever exist, then prints WHOIS
//! registration data and any other domains the registrant holds. The rendered
//! output of a lookup can be saved to a text file.
//!
//! # Example
//!
//! ```no_run
//! use dns_lookup::{run_lookup, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     delay_ms: 0,
//!     no_banner: true,
//!     ..Default::default()
//! };
//!
//! let summary = run_lookup(config).await?;
//! println!("Looked up {} domain(s)", summary.lookups);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and need a Tokio runtime. Terminal input is read
//! synchronously, so a current-thread runtime is sufficient.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
mod output;
mod session;
mod whois;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use dns::{DnsRecord, LookupOutcome, MxRecord, RecordLookup, RecordType, SoaRecord};
pub use error_handling::{InitializationError, WhoisError};
pub use output::{strip_ansi, Category, Renderer, Style, TeeWriter, Transcript};
pub use run::run_lookup;
pub use session::{Clock, LocalClock, Session, SessionSummary};
pub use whois::{RegistrantDomains, ServiceWhoisClient, WhoisRecord, WhoisSource};

// Wiring of the real resolver, WHOIS client and terminal
mod run {
    use std::io;

    use anyhow::Result;

    use crate::config::Config;
    use crate::initialization::init_resolver;
    use crate::output::Renderer;
    use crate::session::{LocalClock, Session, SessionSummary};
    use crate::whois::ServiceWhoisClient;

    /// Runs an interactive session on the process's stdin and stdout.
    ///
    /// The configuration should already have passed [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if reading the terminal, writing the terminal, or
    /// writing a transcript file fails. Lookup failures are reported inline
    /// and do not end the session.
    pub async fn run_lookup(config: Config) -> Result<SessionSummary> {
        let resolver = init_resolver(config.dns_timeout());
        let whois = ServiceWhoisClient::new(config.whois_timeout());
        let session = Session::new(resolver, whois, LocalClock, Renderer::new(config.style()))
            .with_default_output(config.default_output.clone())
            .with_banners(!config.no_banner);

        log::debug!(
            "Starting session (DNS timeout {:?}, WHOIS timeout {:?})",
            config.dns_timeout(),
            config.whois_timeout()
        );

        let stdin = io::stdin();
        let stdout = io::stdout();
        session.run(stdin.lock(), stdout.lock()).await
    }
}
