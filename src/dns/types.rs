//! DNS record data structures.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use strum_macros::{Display, EnumIter};

/// Record types the lookup session queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RecordType {
    /// IPv4 address
    #[strum(serialize = "A")]
    A,
    /// IPv6 address
    #[strum(serialize = "AAAA")]
    Aaaa,
    /// Mail exchanger
    #[strum(serialize = "MX")]
    Mx,
    /// Start of authority
    #[strum(serialize = "SOA")]
    Soa,
    /// Canonical name (alias)
    #[strum(serialize = "CNAME")]
    Cname,
}

impl From<RecordType> for hickory_resolver::proto::rr::RecordType {
    fn from(record_type: RecordType) -> Self {
        use hickory_resolver::proto::rr::RecordType as Wire;
        match record_type {
            RecordType::A => Wire::A,
            RecordType::Aaaa => Wire::AAAA,
            RecordType::Mx => Wire::MX,
            RecordType::Soa => Wire::SOA,
            RecordType::Cname => Wire::CNAME,
        }
    }
}

/// A mail exchanger entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Preference; lower values are tried first
    pub priority: u16,
    /// Host accepting mail for the domain
    pub exchange: String,
}

/// Start-of-authority data for a zone.
///
/// Timing fields are in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaRecord {
    /// Primary nameserver (MNAME)
    pub primary_ns: String,
    /// Mailbox of the zone administrator (RNAME, `@` encoded as the first dot)
    pub responsible_email: String,
    /// Zone serial number
    pub serial: u32,
    /// Secondary refresh interval
    pub refresh: u32,
    /// Retry interval after a failed refresh
    pub retry: u32,
    /// Time after which secondaries stop answering
    pub expire: u32,
    /// Negative-caching TTL
    pub minimum: u32,
}

/// One record returned for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecord {
    /// IPv4 address record
    A(Ipv4Addr),
    /// IPv6 address record
    Aaaa(Ipv6Addr),
    /// Mail exchanger record
    Mx(MxRecord),
    /// Start-of-authority record
    Soa(SoaRecord),
    /// Alias target
    Cname(String),
}

impl DnsRecord {
    /// The record type this value answers.
    pub fn record_type(&self) -> RecordType {
        match self {
            DnsRecord::A(_) => RecordType::A,
            DnsRecord::Aaaa(_) => RecordType::Aaaa,
            DnsRecord::Mx(_) => RecordType::Mx,
            DnsRecord::Soa(_) => RecordType::Soa,
            DnsRecord::Cname(_) => RecordType::Cname,
        }
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsRecord::A(addr) => write!(f, "{addr}"),
            DnsRecord::Aaaa(addr) => write!(f, "{addr}"),
            DnsRecord::Mx(mx) => write!(f, "{} {}", mx.priority, mx.exchange),
            DnsRecord::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.primary_ns,
                soa.responsible_email,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum
            ),
            DnsRecord::Cname(target) => write!(f, "{target}"),
        }
    }
}

/// Result of querying one record type for one domain.
///
/// Only [`LookupOutcome::Found`] is rendered. The other variants keep the
/// reason a type was skipped so it can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// At least one record of the requested type
    Found(Vec<DnsRecord>),
    /// The domain does not exist (NXDOMAIN)
    NotFound,
    /// No answer within the resolver timeout
    Timeout,
    /// The domain exists but has no record of this type
    NoAnswer,
    /// No nameserver could answer (SERVFAIL, REFUSED, no connections)
    NoNameservers,
    /// Any other resolver failure
    Failed(String),
}

impl LookupOutcome {
    /// Records to render, if any.
    pub fn records(&self) -> Option<&[DnsRecord]> {
        match self {
            LookupOutcome::Found(records) => Some(records),
            _ => None,
        }
    }
}
