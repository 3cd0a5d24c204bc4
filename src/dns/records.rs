//! DNS record queries (A, AAAA, MX, SOA, CNAME).
//!
//! Resolver errors are classified into [`LookupOutcome`] variants instead of
//! being propagated: a missing record type is an expected outcome, not a
//! failure.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioAsyncResolver;

use super::types::{DnsRecord, LookupOutcome, MxRecord, RecordType, SoaRecord};

/// Source of DNS answers for the lookup session.
///
/// Implemented by [`TokioAsyncResolver`]; tests provide in-memory tables.
#[allow(async_fn_in_trait)] // Only used through generics, never as a trait object
pub trait RecordLookup {
    /// Queries `record_type` for `domain`. Never fails; failures are outcomes.
    async fn query(&self, domain: &str, record_type: RecordType) -> LookupOutcome;
}

impl RecordLookup for TokioAsyncResolver {
    async fn query(&self, domain: &str, record_type: RecordType) -> LookupOutcome {
        let outcome = match self.lookup(domain, record_type.into()).await {
            Ok(lookup) => outcome_from_lookup(&lookup, record_type),
            Err(e) => classify_error(&e),
        };
        if let LookupOutcome::Failed(reason) = &outcome {
            log::warn!("{record_type} lookup failed for {domain}: {reason}");
        } else {
            log::debug!("{record_type} lookup for {domain}: {outcome:?}");
        }
        outcome
    }
}

/// Converts a successful lookup into an outcome.
///
/// Answers can carry records of other types (the CNAME chain of an A query,
/// for instance); only records of the requested type are kept. An answer with
/// none of them counts as [`LookupOutcome::NoAnswer`].
pub(crate) fn outcome_from_lookup(lookup: &Lookup, record_type: RecordType) -> LookupOutcome {
    let records: Vec<DnsRecord> = lookup
        .iter()
        .filter_map(convert_rdata)
        .filter(|record| record.record_type() == record_type)
        .collect();
    if records.is_empty() {
        LookupOutcome::NoAnswer
    } else {
        LookupOutcome::Found(records)
    }
}

/// Maps hickory record data onto our record types; other types are dropped.
fn convert_rdata(rdata: &RData) -> Option<DnsRecord> {
    match rdata {
        RData::A(a) => Some(DnsRecord::A(a.0)),
        RData::AAAA(aaaa) => Some(DnsRecord::Aaaa(aaaa.0)),
        RData::CNAME(cname) => Some(DnsRecord::Cname(cname.0.to_utf8())),
        RData::MX(mx) => Some(DnsRecord::Mx(MxRecord {
            priority: mx.preference(),
            exchange: mx.exchange().to_utf8(),
        })),
        RData::SOA(soa) => Some(DnsRecord::Soa(SoaRecord {
            primary_ns: soa.mname().to_utf8(),
            responsible_email: soa.rname().to_utf8(),
            serial: soa.serial(),
            // Signed on the wire in hickory; negative values are nonsensical
            refresh: soa.refresh().max(0) as u32,
            retry: soa.retry().max(0) as u32,
            expire: soa.expire().max(0) as u32,
            minimum: soa.minimum(),
        })),
        _ => None,
    }
}

/// Classifies a resolver error into a lookup outcome.
pub(crate) fn classify_error(error: &ResolveError) -> LookupOutcome {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            outcome_for_response_code(*response_code)
        }
        ResolveErrorKind::Timeout => LookupOutcome::Timeout,
        ResolveErrorKind::NoConnections => LookupOutcome::NoNameservers,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            LookupOutcome::Timeout
        }
        ResolveErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            LookupOutcome::Timeout
        }
        _ => LookupOutcome::Failed(error.to_string()),
    }
}

/// Outcome for an answer that carried no records of the requested type.
pub(crate) fn outcome_for_response_code(code: ResponseCode) -> LookupOutcome {
    match code {
        ResponseCode::NXDomain => LookupOutcome::NotFound,
        ResponseCode::ServFail | ResponseCode::Refused => LookupOutcome::NoNameservers,
        _ => LookupOutcome::NoAnswer,
    }
}
