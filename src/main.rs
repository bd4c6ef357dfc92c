//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mass_hash_request` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mass_hash_request::initialization::init_logger_with;
use mass_hash_request::{run, Options, QueryError};

fn main() -> Result<()> {
    let options = Options::parse();

    // Initialize logger based on options
    let log_level = options.log_level.clone();
    init_logger_with(log_level.into(), options.log_file.as_deref())
        .context("Failed to initialize logger")?;

    match run(&options) {
        Ok(Some(report)) => {
            println!(
                "Processed {} quer{} ({} found, {} missing)",
                report.total,
                if report.total == 1 { "y" } else { "ies" },
                report.found,
                report.missing
            );
            println!("Results archived in {}", report.archive_path.display());
            Ok(())
        }
        Ok(None) => {
            println!("No query parameters given");
            Ok(())
        }
        Err(e) => {
            // An incompatible filter combination is the one expected,
            // user-facing failure; keep its message bare.
            if let Some(query_error) = e.downcast_ref::<QueryError>() {
                eprintln!("{query_error}");
            } else {
                eprintln!("mass_hash_request error: {e:#}");
            }
            process::exit(1);
        }
    }
}
