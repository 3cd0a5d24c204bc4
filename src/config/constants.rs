//! Configuration constants.
//!
//! Defaults for the lookup session: record order, timeouts, pacing and the
//! fixed strings the loop prompts with.

use crate::dns::RecordType;

/// Record types queried for every domain, in rendering order.
pub const RECORD_TYPES: [RecordType; 5] = [
    RecordType::A,
    RecordType::Aaaa,
    RecordType::Mx,
    RecordType::Soa,
    RecordType::Cname,
];

/// Input that ends the session at the domain prompt (compared case-insensitively).
pub const QUIT_SENTINEL: &str = "q";

/// Filename used when the user accepts the default at the save prompt.
pub const DEFAULT_OUTPUT_FILE: &str = "DNS_LOOKUP.txt";

/// Timestamp format written in the saved transcript header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Rendering
/// Delay between rendered characters in milliseconds.
pub const DEFAULT_CHAR_DELAY_MS: u64 = 50;
/// Upper bound accepted for `--delay-ms`.
/// Above this a single WHOIS section takes minutes to print.
pub const MAX_CHAR_DELAY_MS: u64 = 1000;

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Timeout for a whole WHOIS lookup in seconds
/// Covers the RDAP attempt and the WHOIS fallback together.
pub const WHOIS_TIMEOUT_SECS: u64 = 20;
