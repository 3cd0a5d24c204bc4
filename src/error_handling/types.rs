//! Error type definitions.
//!
//! This module defines the error types surfaced by initialization and the
//! WHOIS source. DNS outcomes are not errors; see [`crate::dns::LookupOutcome`].

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failures of a WHOIS lookup.
///
/// Every variant is a soft failure: the session renders a single
/// "not retrieved" line (or a search-error line for [`WhoisError::MalformedField`])
/// and carries on.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// The WHOIS service rejected the query or could not reach a server.
    #[error("WHOIS lookup failed: {0}")]
    Service(#[from] whois_service::WhoisError),

    /// No answer arrived within the configured timeout.
    #[error("WHOIS lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The registry holds no record for the domain.
    #[error("WHOIS server has no record for the domain")]
    NotFound,

    /// The upstream server refused the query because of rate limiting.
    #[error("WHOIS server rate limited the query")]
    RateLimited,

    /// The server answered without any data.
    #[error("WHOIS server returned no data")]
    Empty,

    /// A field was present but could not be read as expected.
    #[error("malformed WHOIS field {field}: {value:?}")]
    MalformedField {
        /// Field name as it appears in the response
        field: &'static str,
        /// Offending value
        value: String,
    },
}
