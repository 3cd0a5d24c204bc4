//! WHOIS source backed by the `whois-service` crate.

use std::time::Duration;

use whois_service::WhoisClient;

use super::parse::record_from_response;
use super::types::WhoisRecord;
use crate::error_handling::WhoisError;

/// Source of WHOIS records for the lookup session.
#[allow(async_fn_in_trait)] // Only used through generics, never as a trait object
pub trait WhoisSource {
    /// Fetches the WHOIS record for `domain`.
    async fn fetch(&self, domain: &str) -> Result<WhoisRecord, WhoisError>;
}

/// Looks domains up through `whois-service` (RDAP first, WHOIS fallback).
///
/// A fresh uncached client is built for every lookup, so repeating a domain
/// always queries upstream again.
#[derive(Debug, Clone)]
pub struct ServiceWhoisClient {
    timeout: Duration,
}

impl ServiceWhoisClient {
    /// Creates a source that gives up on a lookup after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl WhoisSource for ServiceWhoisClient {
    async fn fetch(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        log::info!("Starting WHOIS lookup for domain: {domain}");

        let lookup = async {
            match WhoisClient::new_without_cache().await {
                Ok(client) => client.lookup(domain).await,
                Err(e) => Err(e),
            }
        };

        let response = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => result?,
            Err(_) => return Err(WhoisError::Timeout(self.timeout)),
        };

        log::debug!(
            "WHOIS answer for {domain} from {} ({:?}, {} ms)",
            response.whois_server,
            response.lookup_status,
            response.query_time_ms
        );
        record_from_response(&response)
    }
}
