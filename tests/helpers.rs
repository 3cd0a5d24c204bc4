// Shared fakes for driving a lookup session without network access.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use dns_lookup::{
    Clock, LookupOutcome, RecordLookup, RecordType, Renderer, Session, Style, WhoisError,
    WhoisRecord, WhoisSource,
};

/// DNS answers keyed by record type; anything unlisted has no answer.
#[derive(Default)]
pub struct FakeDns {
    answers: HashMap<RecordType, LookupOutcome>,
    queries: Rc<RefCell<Vec<(String, RecordType)>>>,
}

/// Queries a [`FakeDns`] received, shared with the test after the fake moves
/// into a session.
pub type QueryLog = Rc<RefCell<Vec<(String, RecordType)>>>;

impl FakeDns {
    pub fn with(mut self, record_type: RecordType, outcome: LookupOutcome) -> Self {
        self.answers.insert(record_type, outcome);
        self
    }

    pub fn query_log(&self) -> QueryLog {
        Rc::clone(&self.queries)
    }
}

impl RecordLookup for FakeDns {
    async fn query(&self, domain: &str, record_type: RecordType) -> LookupOutcome {
        self.queries
            .borrow_mut()
            .push((domain.to_string(), record_type));
        self.answers
            .get(&record_type)
            .cloned()
            .unwrap_or(LookupOutcome::NoAnswer)
    }
}

/// WHOIS that returns a fixed record, or fails when none is set.
#[derive(Default)]
pub struct FakeWhois {
    pub record: Option<WhoisRecord>,
}

impl WhoisSource for FakeWhois {
    async fn fetch(&self, _domain: &str) -> Result<WhoisRecord, WhoisError> {
        self.record.clone().ok_or(WhoisError::Empty)
    }
}

/// Clock stopped at 2024-03-09 14:05:07.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .expect("valid fixed timestamp")
    }
}

/// Session with plain output and no banners.
pub fn plain_session(dns: FakeDns, whois: FakeWhois) -> Session<FakeDns, FakeWhois, FixedClock> {
    Session::new(dns, whois, FixedClock, Renderer::new(Style::PLAIN)).with_banners(false)
}

/// Runs `session` over scripted input and returns everything written.
pub async fn run_scripted(
    session: &Session<FakeDns, FakeWhois, FixedClock>,
    input: &str,
) -> (dns_lookup::SessionSummary, String) {
    let mut out = Vec::new();
    let summary = session
        .run(Cursor::new(input.to_string()), &mut out)
        .await
        .expect("session should not fail on in-memory I/O");
    (summary, String::from_utf8(out).expect("output is UTF-8"))
}
