//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_lookup` library that handles:
//! - Command-line argument parsing and validation
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_lookup::initialization::init_logger_with;
use dns_lookup::{run_lookup, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("dns_lookup: {e}");
        process::exit(2);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_lookup(config).await {
        Ok(summary) => {
            log::info!(
                "Looked up {} domain(s), saved {} file(s)",
                summary.lookups,
                summary.saved.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}
