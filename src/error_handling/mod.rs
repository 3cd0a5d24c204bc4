//! Error handling.
//!
//! Errors fall into two groups:
//! - **Expected absence**: a DNS record type that does not exist, a timeout, a
//!   missing nameserver. These are modelled as [`crate::dns::LookupOutcome`]
//!   variants and never reach the user.
//! - **Soft failures**: WHOIS lookups and the registrant cross-reference. These
//!   are [`WhoisError`]s and surface as one informational line.
//!
//! Terminal and file I/O errors are not categorized; they propagate as
//! `anyhow::Error` and end the process.

mod types;

// Re-export public API
pub use types::{InitializationError, WhoisError};
