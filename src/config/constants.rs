//! Configuration constants.

/// Settings file created in the working directory on first run.
pub const CONFIG_FILE: &str = "config.json";

/// Archive written to the working directory after materialization.
pub const ARCHIVE_FILE: &str = "result_archive.tar.gz";

/// Default MASS API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/";

/// Default hash algorithm used for hash-file lookups.
pub const DEFAULT_HASH: &str = "md5";

/// Hash algorithms the MASS file-sample collection can be queried by.
pub const DEFAULT_HASHES: [&str; 4] = ["md5", "sha1", "sha256", "sha512"];

/// Default output directory for the materialized result tree.
pub const DEFAULT_DIRECTORY: &str = "mhr_result";

/// Per-request timeout in seconds for the blocking HTTP client.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
