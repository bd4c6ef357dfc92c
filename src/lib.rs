//! mass_hash_request library: MASS batch export functionality
//!
//! This library queries a MASS server for samples matching hash sums or
//! metadata filters, materializes each result as a directory tree (sample
//! content, metadata, analysis reports), and archives the tree as a single
//! tar.gz artifact.
//!
//! # Example
//!
//! ```no_run
//! use mass_hash_request::{run, Options};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = Options {
//!     hashfile: Some(std::path::PathBuf::from("hashes.txt")),
//!     ..Default::default()
//! };
//!
//! if let Some(report) = run(&options)? {
//!     println!("{} found, {} missing", report.found, report.missing);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod archive;
mod client;
pub mod config;
mod error_handling;
pub mod initialization;
mod materialize;
mod models;
mod query;
mod utils;

// Re-export public API
pub use archive::write_archive;
pub use client::{MassClient, SampleKind};
pub use config::{LogLevel, Options, Settings};
pub use error_handling::{ConfigError, InitializationError, QueryError};
pub use materialize::materialize_results;
pub use models::{QueryKey, Report, ResultSet, Sample};
pub use query::{build_query_parameters, QueryParameters};
pub use run::{run, RunReport};
pub use utils::read_hash_sums;

// Internal run module (contains the batch export orchestration)
mod run {
    use std::path::{Path, PathBuf};

    use anyhow::Result;
    use log::info;

    use crate::archive::write_archive;
    use crate::client::MassClient;
    use crate::config::{Options, Settings, ARCHIVE_FILE, CONFIG_FILE};
    use crate::materialize::materialize_results;
    use crate::query::build_query_parameters;
    use crate::utils::read_hash_sums;

    /// Results of a completed export run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of query keys processed
        pub total: usize,
        /// Keys that matched a sample
        pub found: usize,
        /// Keys with no match
        pub missing: usize,
        /// Path of the archive written at the end of the run
        pub archive_path: PathBuf,
    }

    /// Runs a full export with the provided options.
    ///
    /// Loads (or creates) `config.json`, applies CLI overrides, queries MASS
    /// either for the hash sums in `--hashfile` or for the attribute filters,
    /// materializes the results under the configured output directory, and
    /// archives the tree.
    ///
    /// Returns `Ok(None)` when neither a hash file nor any filter was given;
    /// there is nothing to query in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, an unknown
    /// `--hash-type` is requested, no sample variant accepts the filter
    /// combination ([`crate::QueryError::IncompatibleParameters`]), or a
    /// network or filesystem operation fails.
    pub fn run(options: &Options) -> Result<Option<RunReport>> {
        let mut settings = Settings::load_or_create(Path::new(CONFIG_FILE))?;
        settings.apply_overrides(options)?;

        let parameters = build_query_parameters(options);
        let client = MassClient::new(&settings.base_url, &settings.api_key)?;

        let results = if let Some(hashfile) = &options.hashfile {
            let hashes = read_hash_sums(hashfile)?;
            info!(
                "looking up {} hash sums using {}",
                hashes.len(),
                settings.hash
            );
            client.query_for_hashes(&settings.hash, &hashes, &parameters)?
        } else if !parameters.is_empty() {
            info!("querying samples by {} filter(s)", parameters.len());
            client.query_for_attributes(&parameters)?
        } else {
            return Ok(None);
        };

        let found = results.iter().filter(|(_, sample)| sample.is_some()).count();
        let missing = results.len() - found;

        let output_dir = PathBuf::from(&settings.directory);
        materialize_results(&output_dir, &results, &client, options.print_missing)?;

        let archive_path = PathBuf::from(ARCHIVE_FILE);
        write_archive(&output_dir, &archive_path)?;

        Ok(Some(RunReport {
            total: results.len(),
            found,
            missing,
            archive_path,
        }))
    }
}
