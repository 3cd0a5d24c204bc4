//! WHOIS data structures.

use chrono::{DateTime, Utc};

use crate::error_handling::WhoisError;

/// WHOIS lookup result
///
/// Fields come from the registry or registrar answer and are all best-effort:
/// which ones are present varies by TLD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    /// Queried domain first, then other domains the answer lists, lowercased
    pub domains: Vec<String>,
    /// Registrar name
    pub registrar: Option<String>,
    /// Registrant name
    pub registrant_name: Option<String>,
    /// Domain creation date
    pub creation_date: Option<DateTime<Utc>>,
    /// Domain expiration date
    pub expiration_date: Option<DateTime<Utc>>,
    /// Domain updated date
    pub updated_date: Option<DateTime<Utc>>,
    /// Domain status (e.g., "clientTransferProhibited")
    pub status: Vec<String>,
    /// Nameservers from WHOIS
    pub nameservers: Vec<String>,
    /// Raw WHOIS text
    pub raw_text: String,
}

/// Domains registered to the same registrant as the queried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantDomains {
    /// Registrant the search was made for
    pub registrant: String,
    /// Listed domains other than the queried one
    pub others: Vec<String>,
}

impl WhoisRecord {
    /// True when no field beyond the raw text was recognised.
    pub fn is_unstructured(&self) -> bool {
        self.registrar.is_none()
            && self.registrant_name.is_none()
            && self.creation_date.is_none()
            && self.expiration_date.is_none()
            && self.updated_date.is_none()
            && self.status.is_empty()
            && self.nameservers.is_empty()
    }

    /// Other domains listed for this record's registrant.
    ///
    /// Returns `Ok(None)` when the response names no registrant.
    ///
    /// # Errors
    ///
    /// Returns [`WhoisError::MalformedField`] when a listed domain is not a
    /// single hostname token.
    pub fn registrant_domains(
        &self,
        queried: &str,
    ) -> Result<Option<RegistrantDomains>, WhoisError> {
        let Some(registrant) = self.registrant_name.as_ref() else {
            return Ok(None);
        };

        let mut others = Vec::new();
        for domain in &self.domains {
            if domain.is_empty() || domain.chars().any(char::is_whitespace) {
                return Err(WhoisError::MalformedField {
                    field: "Domain Name",
                    value: domain.clone(),
                });
            }
            let same = domain
                .trim_end_matches('.')
                .eq_ignore_ascii_case(queried.trim_end_matches('.'));
            if !same && !others.contains(domain) {
                others.push(domain.clone());
            }
        }

        Ok(Some(RegistrantDomains {
            registrant: registrant.clone(),
            others,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(registrant: Option<&str>, domains: &[&str]) -> WhoisRecord {
        WhoisRecord {
            registrant_name: registrant.map(str::to_string),
            domains: domains.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_registrant_domains_excludes_queried_domain() {
        let record = record_with(
            Some("Example Holdings"),
            &["example.com", "example.net", "example.org"],
        );
        let found = record.registrant_domains("EXAMPLE.COM").unwrap().unwrap();
        assert_eq!(found.registrant, "Example Holdings");
        assert_eq!(found.others, vec!["example.net", "example.org"]);
    }

    #[test]
    fn test_registrant_domains_only_queried_domain() {
        let record = record_with(Some("Example Holdings"), &["example.com"]);
        let found = record.registrant_domains("example.com").unwrap().unwrap();
        assert!(found.others.is_empty());
    }

    #[test]
    fn test_registrant_domains_without_registrant() {
        let record = record_with(None, &["example.com", "example.net"]);
        assert_eq!(record.registrant_domains("example.com").unwrap(), None);
    }

    #[test]
    fn test_registrant_domains_malformed_entry() {
        let record = record_with(Some("Example Holdings"), &["example.net (pending)"]);
        let err = record.registrant_domains("example.com").unwrap_err();
        assert!(matches!(err, WhoisError::MalformedField { .. }));
    }

    #[test]
    fn test_unstructured_record() {
        let record = WhoisRecord {
            domains: vec!["example.com".to_string()],
            raw_text: "some free text".to_string(),
            ..Default::default()
        };
        assert!(record.is_unstructured());
        assert!(!record_with(Some("x"), &[]).is_unstructured());
    }
}
