//! Configuration types and CLI options.
//!
//! This module defines the command-line surface and the log-level enum used
//! for argument parsing.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    #[default]
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

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("Invalid date: {s}"))
}

/// Command-line options.
///
/// Filter flags are all optional; only the ones the user sets are projected
/// into query parameters (see [`crate::build_query_parameters`]). Dates must
/// be given as `YYYY-MM-DD` and are validated at parse time.
#[derive(Parser, Debug, Default)]
#[command(
    name = "MASS Hash Request",
    version,
    about = "This tool queries a MASS server for multiple hash sums and represents the results as a directory tree."
)]
pub struct Options {
    /// Only match samples delivered on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub delivered_after: Option<NaiveDate>,

    /// Only match samples delivered on or before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub delivered_before: Option<NaiveDate>,

    /// Only match samples first seen on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub first_seen_after: Option<NaiveDate>,

    /// Only match samples first seen on or before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub first_seen_before: Option<NaiveDate>,

    /// A list of comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Only match file samples with Shannon entropy below this value
    #[arg(long)]
    pub entropy_below: Option<f64>,

    /// Only match file samples with Shannon entropy above this value
    #[arg(long)]
    pub entropy_above: Option<f64>,

    /// Only match file samples smaller than this many bytes
    #[arg(long)]
    pub filesize_below: Option<u64>,

    /// Only match file samples larger than this many bytes
    #[arg(long)]
    pub filesize_above: Option<u64>,

    /// File containing hash sums, one per line
    #[arg(long)]
    pub hashfile: Option<PathBuf>,

    /// Only match file samples with this MIME type
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Only match file samples known under this file name
    #[arg(long)]
    pub file_name: Option<String>,

    /// Only match domain samples with exactly this domain
    #[arg(long)]
    pub domain: Option<String>,

    /// Only match domain samples whose domain contains this string
    #[arg(long)]
    pub domain_contains: Option<String>,

    /// Only match domain samples whose domain starts with this string
    #[arg(long)]
    pub domain_startswith: Option<String>,

    /// Only match domain samples whose domain ends with this string
    #[arg(long)]
    pub domain_endswith: Option<String>,

    /// Only match URI samples with exactly this URI
    #[arg(long)]
    pub uri: Option<String>,

    /// Only match URI samples whose URI contains this string
    #[arg(long)]
    pub uri_contains: Option<String>,

    /// Only match URI samples whose URI starts with this string
    #[arg(long)]
    pub uri_startswith: Option<String>,

    /// Only match URI samples whose URI ends with this string
    #[arg(long)]
    pub uri_endswith: Option<String>,

    /// Only match IP samples with exactly this address
    #[arg(long)]
    pub ip: Option<String>,

    /// Only match IP samples whose address starts with this string
    #[arg(long)]
    pub ip_startswith: Option<String>,

    /// API key for MASS (overrides the configured key for this run)
    #[arg(short = 'A', long)]
    pub api_key: Option<String>,

    /// Hash algorithm for hash-file lookups (must be one of the configured hashes)
    #[arg(long)]
    pub hash_type: Option<String>,

    /// Path to a log file; log output goes to stderr when omitted
    #[arg(short = 'l', long)]
    pub log_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'L', long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Print hash values which were not found on MASS
    #[arg(short = 'p', long)]
    pub print_missing: bool,
}
