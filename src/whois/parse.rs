//! WHOIS data conversion.

use chrono::{DateTime, Utc};
use whois_service::{LookupStatus, ParsedWhoisData, WhoisResponse};

use super::types::WhoisRecord;
use crate::error_handling::WhoisError;

/// Converts a whois-service response into a [`WhoisRecord`].
///
/// # Errors
///
/// Unregistered domains, throttled queries and empty answers become
/// [`WhoisError`]s so the session renders them like any other failure.
pub(crate) fn record_from_response(response: &WhoisResponse) -> Result<WhoisRecord, WhoisError> {
    match response.lookup_status {
        LookupStatus::NotFound => return Err(WhoisError::NotFound),
        LookupStatus::RateLimited => return Err(WhoisError::RateLimited),
        LookupStatus::Found => {}
    }
    if response.parsed_data.is_none() && response.raw_data.trim().is_empty() {
        return Err(WhoisError::Empty);
    }

    let mut record = match &response.parsed_data {
        Some(parsed) => convert_parsed_data(parsed),
        None => WhoisRecord::default(),
    };
    record.domains = listed_domains(response);
    record.raw_text = response.raw_data.clone();
    Ok(record)
}

/// Maps the structured fields; dates that do not parse are dropped.
fn convert_parsed_data(parsed: &ParsedWhoisData) -> WhoisRecord {
    let date = |value: &Option<String>| value.as_deref().and_then(parse_date_string);

    WhoisRecord {
        registrar: parsed.registrar.clone(),
        registrant_name: parsed.registrant_name.clone(),
        creation_date: date(&parsed.creation_date),
        expiration_date: date(&parsed.expiration_date),
        updated_date: date(&parsed.updated_date),
        status: parsed.status.clone(),
        nameservers: parsed
            .name_servers
            .iter()
            .map(|ns| ns.trim_end_matches('.').to_lowercase())
            .collect(),
        ..Default::default()
    }
}

/// The queried domain followed by any other `Domain Name:` entries the raw
/// answer lists, lowercased and without duplicates.
fn listed_domains(response: &WhoisResponse) -> Vec<String> {
    let mut domains = vec![response.domain.to_lowercase()];
    for line in response.raw_data.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if !key.trim().eq_ignore_ascii_case("domain name") {
            continue;
        }
        let value = value.trim().to_lowercase();
        if !domains.contains(&value) {
            domains.push(value);
        }
    }
    domains
}

/// Attempts to parse a date string in various formats
fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    // Try common WHOIS date formats
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    // ISO 8601 with an explicit offset, e.g. 2024-01-15T10:30:45+02:00
    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
