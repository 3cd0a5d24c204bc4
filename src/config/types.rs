//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CHAR_DELAY_MS, DEFAULT_OUTPUT_FILE, DNS_TIMEOUT_SECS,
    MAX_CHAR_DELAY_MS, WHOIS_TIMEOUT_SECS,
};
use crate::output::Style;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Lookup session configuration.
///
/// Parsed from the command line by `clap`, or built programmatically with
/// struct update syntax over [`Config::default`]. Every option is optional;
/// running the binary with no flags reproduces the interactive defaults.
///
/// # Examples
///
/// ```bash
/// # Defaults: 50ms pacing, colors on, saves to DNS_LOOKUP.txt
/// dns_lookup
///
/// # Fast output without colors, debug logs on stderr
/// dns_lookup --delay-ms 0 --no-color --log-level debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_lookup",
    about = "Looks up DNS records and WHOIS data for domains, interactively."
)]
pub struct Config {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Delay between rendered characters, in milliseconds (0 prints instantly)
    #[arg(long, default_value_t = DEFAULT_CHAR_DELAY_MS)]
    pub delay_ms: u64,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,

    /// Skip the opening and closing banners
    #[arg(long)]
    pub no_banner: bool,

    /// File offered as the default at the save prompt
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_FILE)]
    pub default_output: PathBuf,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Timeout for a whole WHOIS lookup in seconds
    #[arg(long, default_value_t = WHOIS_TIMEOUT_SECS)]
    pub whois_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            delay_ms: DEFAULT_CHAR_DELAY_MS,
            no_color: false,
            no_banner: false,
            default_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            whois_timeout_secs: WHOIS_TIMEOUT_SECS,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks option values that `clap` cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigValidationError`] found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.delay_ms > MAX_CHAR_DELAY_MS {
            return Err(ConfigValidationError {
                field: "delay_ms",
                message: format!(
                    "must be between 0 and {MAX_CHAR_DELAY_MS} milliseconds (got {})",
                    self.delay_ms
                ),
            });
        }
        if self.dns_timeout_secs == 0 {
            return Err(ConfigValidationError {
                field: "dns_timeout_secs",
                message: "must be greater than 0 seconds".to_string(),
            });
        }
        if self.whois_timeout_secs == 0 {
            return Err(ConfigValidationError {
                field: "whois_timeout_secs",
                message: "must be greater than 0 seconds".to_string(),
            });
        }
        if self.default_output.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "default_output",
                message: "must be a non-empty file path".to_string(),
            });
        }
        Ok(())
    }

    /// Terminal styling derived from the color and delay options.
    pub fn style(&self) -> Style {
        Style {
            color: !self.no_color,
            char_delay: Duration::from_millis(self.delay_ms),
        }
    }

    /// DNS query timeout as a [`Duration`].
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }

    /// WHOIS per-server timeout as a [`Duration`].
    pub fn whois_timeout(&self) -> Duration {
        Duration::from_secs(self.whois_timeout_secs)
    }
}
