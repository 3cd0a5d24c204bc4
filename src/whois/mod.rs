//! WHOIS domain lookup.
//!
//! Lookups are delegated to the `whois-service` crate (RDAP first, WHOIS
//! fallback); this module maps its answers into [`WhoisRecord`] and finds
//! other domains held by the same registrant.

mod client;
mod parse;
mod types;

// Re-export public API
pub use client::{ServiceWhoisClient, WhoisSource};
pub use types::{RegistrantDomains, WhoisRecord};
