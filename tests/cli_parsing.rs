//! Tests for command-line parsing and validation.

use clap::Parser;
use dns_lookup::{Config, LogFormat, LogLevel};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_all_flags() {
    let config = Config::try_parse_from([
        "dns_lookup",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--delay-ms",
        "0",
        "--no-color",
        "--no-banner",
        "--default-output",
        "out/lookup.txt",
        "--dns-timeout-secs",
        "2",
        "--whois-timeout-secs",
        "3",
    ])
    .expect("flags should parse");

    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert!(config.no_banner);
    assert_eq!(config.default_output, PathBuf::from("out/lookup.txt"));
    assert_eq!(config.dns_timeout(), Duration::from_secs(2));
    assert_eq!(config.whois_timeout(), Duration::from_secs(3));

    let style = config.style();
    assert!(!style.color);
    assert_eq!(style.char_delay, Duration::ZERO);
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let result = Config::try_parse_from(["dns_lookup", "--log-level", "verbose"]);
    assert!(result.is_err());
}

#[test]
fn test_negative_delay_is_rejected_by_parser() {
    let result = Config::try_parse_from(["dns_lookup", "--delay-ms", "-5"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_timeout_fails_validation() {
    let config = Config::try_parse_from(["dns_lookup", "--dns-timeout-secs", "0"])
        .expect("zero parses as u64");
    let err = config.validate().expect_err("zero timeout is invalid");
    assert_eq!(err.field, "dns_timeout_secs");
}

#[test]
fn test_excessive_delay_fails_validation() {
    let config = Config::try_parse_from(["dns_lookup", "--delay-ms", "5000"])
        .expect("large delay parses");
    let err = config.validate().expect_err("delay above limit is invalid");
    assert_eq!(err.field, "delay_ms");
    assert!(err.to_string().contains("delay_ms"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let result = Config::try_parse_from(["dns_lookup", "--whois-server", "whois.iana.org"]);
    assert!(result.is_err());
}
