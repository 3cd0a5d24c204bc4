//! DNS resolution and record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Address queries (A/AAAA records)
//! - Mail exchanger queries (MX records)
//! - Zone authority queries (SOA records)
//! - Alias queries (CNAME records)
//!
//! Every query yields a [`LookupOutcome`]; resolver errors are classified
//! rather than returned.

mod records;
mod types;

// Re-export public API
pub use records::RecordLookup;
pub use types::{DnsRecord, LookupOutcome, MxRecord, RecordType, SoaRecord};
