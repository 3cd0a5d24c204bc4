//! Rendering of DNS and WHOIS results.

use std::io::{self, Write};

use crate::dns::{DnsRecord, RecordType};
use crate::error_handling::WhoisError;
use crate::output::{Category, Renderer};
use crate::whois::WhoisRecord;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header line introducing the records of one type.
pub(crate) fn section_header(record_type: RecordType, domain: &str) -> String {
    match record_type {
        RecordType::A => format!("IPv4 record(s) for {domain}:"),
        RecordType::Aaaa => format!("IPv6 record(s) for {domain}:"),
        RecordType::Mx => format!("MX (Mail Exchange) record(s) for {domain}:"),
        RecordType::Soa => format!("SOA (Start of Authority) record for {domain}:"),
        RecordType::Cname => format!("CNAME record(s) for {domain}:"),
    }
}

/// Lines rendered for one record.
pub(crate) fn record_lines(record: &DnsRecord) -> Vec<String> {
    match record {
        DnsRecord::Mx(mx) => vec![format!(
            "- Priority: {}, Mail Server: {}",
            mx.priority, mx.exchange
        )],
        DnsRecord::Soa(soa) => vec![
            format!("- Primary Name Server: {}", soa.primary_ns),
            format!("- Responsible Party's Email: {}", soa.responsible_email),
            format!("- Serial Number: {}", soa.serial),
            format!("- Refresh Time: {} seconds", soa.refresh),
            format!("- Retry Time: {} seconds", soa.retry),
            format!("- Expire Time: {} seconds", soa.expire),
            format!("- Minimum TTL: {} seconds", soa.minimum),
        ],
        other => vec![format!("- {other}")],
    }
}

/// Renders the header and every record of one type.
pub(crate) fn render_records<W: Write>(
    renderer: &Renderer,
    out: &mut W,
    domain: &str,
    record_type: RecordType,
    records: &[DnsRecord],
) -> io::Result<()> {
    renderer.line(out, Category::Heading, &section_header(record_type, domain))?;
    for record in records {
        for line in record_lines(record) {
            renderer.line(out, Category::Data, &line)?;
        }
    }
    Ok(())
}

/// Text shown for a WHOIS record: labeled fields, or the raw answer when no
/// field was recognised.
pub(crate) fn whois_body(record: &WhoisRecord) -> Vec<String> {
    if record.is_unstructured() {
        return record
            .raw_text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
    }

    let mut lines = Vec::new();
    if let Some(domain) = record.domains.first() {
        lines.push(format!("Domain Name: {domain}"));
    }
    if let Some(registrar) = &record.registrar {
        lines.push(format!("Registrar: {registrar}"));
    }
    if let Some(name) = &record.registrant_name {
        lines.push(format!("Registrant: {name}"));
    }
    for (label, date) in [
        ("Creation Date", record.creation_date),
        ("Expiration Date", record.expiration_date),
        ("Updated Date", record.updated_date),
    ] {
        if let Some(date) = date {
            lines.push(format!("{label}: {}", date.format(DATE_FORMAT)));
        }
    }
    if !record.status.is_empty() {
        lines.push(format!("Status: {}", record.status.join(", ")));
    }
    if !record.nameservers.is_empty() {
        lines.push(format!("Name Servers: {}", record.nameservers.join(", ")));
    }
    lines
}

/// Renders the WHOIS section and, on success, the registrant search.
///
/// A failed lookup renders exactly one line.
pub(crate) fn render_whois<W: Write>(
    renderer: &Renderer,
    out: &mut W,
    domain: &str,
    result: &Result<WhoisRecord, WhoisError>,
) -> io::Result<()> {
    match result {
        Ok(record) => {
            let mut text = format!("WHOIS information for {domain}:");
            for line in whois_body(record) {
                text.push('\n');
                text.push_str(&line);
            }
            renderer.line(out, Category::Notice, &text)?;
            render_registrant_search(renderer, out, domain, record)
        }
        Err(e) => {
            log::info!("WHOIS lookup failed for {domain}: {e}");
            renderer.line(
                out,
                Category::Notice,
                &format!("WHOIS information not retrieved for {domain}."),
            )
        }
    }
}

/// Lists other domains held by the same registrant, best-effort.
fn render_registrant_search<W: Write>(
    renderer: &Renderer,
    out: &mut W,
    domain: &str,
    record: &WhoisRecord,
) -> io::Result<()> {
    match record.registrant_domains(domain) {
        Ok(Some(found)) => {
            renderer.line(
                out,
                Category::Notice,
                &format!(
                    "Searching for other domains owned by {}...",
                    found.registrant
                ),
            )?;
            if found.others.is_empty() {
                renderer.line(out, Category::Notice, "No other domains found.")?;
            }
            for other in &found.others {
                renderer.line(out, Category::Notice, &format!("- {other}"))?;
            }
            Ok(())
        }
        Ok(None) => renderer.line(out, Category::Notice, "No other domains found."),
        Err(e) => {
            log::debug!("Registrant search failed for {domain}: {e}");
            renderer.line(out, Category::Notice, "Error searching for other domains.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{MxRecord, SoaRecord};
    use crate::output::Style;
    use std::net::Ipv6Addr;

    fn rendered(f: impl FnOnce(&Renderer, &mut Vec<u8>) -> io::Result<()>) -> String {
        let renderer = Renderer::new(Style::PLAIN);
        let mut out = Vec::new();
        f(&renderer, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn soa() -> SoaRecord {
        SoaRecord {
            primary_ns: "ns.icann.org.".to_string(),
            responsible_email: "noc.dns.icann.org.".to_string(),
            serial: 2024081404,
            refresh: 7200,
            retry: 3600,
            expire: 1209600,
            minimum: 3600,
        }
    }

    #[test]
    fn test_soa_renders_seven_labeled_fields() {
        let lines = record_lines(&DnsRecord::Soa(soa()));
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "- Primary Name Server: ns.icann.org.");
        assert_eq!(lines[1], "- Responsible Party's Email: noc.dns.icann.org.");
        assert_eq!(lines[2], "- Serial Number: 2024081404");
        assert_eq!(lines[3], "- Refresh Time: 7200 seconds");
        assert_eq!(lines[6], "- Minimum TTL: 3600 seconds");
    }

    #[test]
    fn test_mx_renders_priority_and_exchange() {
        let lines = record_lines(&DnsRecord::Mx(MxRecord {
            priority: 10,
            exchange: "mail.example.com.".to_string(),
        }));
        assert_eq!(lines, vec!["- Priority: 10, Mail Server: mail.example.com."]);
    }

    #[test]
    fn test_render_records_header_then_lines() {
        let text = rendered(|r, out| {
            render_records(
                r,
                out,
                "example.com",
                RecordType::Aaaa,
                &[DnsRecord::Aaaa(Ipv6Addr::LOCALHOST)],
            )
        });
        assert_eq!(text, "IPv6 record(s) for example.com:\n- ::1\n");
    }

    #[test]
    fn test_whois_failure_renders_one_line() {
        let text = rendered(|r, out| render_whois(r, out, "example.com", &Err(WhoisError::Empty)));
        assert_eq!(text, "WHOIS information not retrieved for example.com.\n");
    }

    #[test]
    fn test_whois_success_without_registrant() {
        let record = WhoisRecord {
            domains: vec!["example.com".to_string()],
            registrar: Some("Example Registrar".to_string()),
            nameservers: vec!["a.iana-servers.net".to_string()],
            ..Default::default()
        };
        let text = rendered(|r, out| render_whois(r, out, "example.com", &Ok(record)));
        assert_eq!(
            text,
            "WHOIS information for example.com:\n\
             Domain Name: example.com\n\
             Registrar: Example Registrar\n\
             Name Servers: a.iana-servers.net\n\
             No other domains found.\n"
        );
    }

    #[test]
    fn test_whois_registrant_search_lists_other_domains() {
        let record = WhoisRecord {
            domains: vec!["example.com".to_string(), "example.net".to_string()],
            registrant_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let text = rendered(|r, out| render_whois(r, out, "example.com", &Ok(record)));
        assert!(text.contains("Searching for other domains owned by Jane Doe...\n- example.net\n"));
        assert!(!text.contains("No other domains found."));
    }

    #[test]
    fn test_whois_registrant_search_error_is_swallowed() {
        let record = WhoisRecord {
            domains: vec!["bad entry".to_string()],
            registrant_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let text = rendered(|r, out| render_whois(r, out, "example.com", &Ok(record)));
        assert!(text.ends_with("Error searching for other domains.\n"));
    }

    #[test]
    fn test_unstructured_whois_shows_raw_lines() {
        let record = WhoisRecord {
            raw_text: "Free text answer\n\n  indented line  \n".to_string(),
            ..Default::default()
        };
        assert_eq!(whois_body(&record), vec!["Free text answer", "  indented line"]);
    }
}
