//! HTTP client initialization.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::error_handling::InitializationError;

/// Builds the blocking HTTP client used for all MASS requests.
///
/// A non-empty API key is attached as a default `Authorization` header and
/// marked sensitive so it never shows up in debug output.
pub fn init_client(api_key: &str) -> Result<Client, InitializationError> {
    let mut headers = HeaderMap::new();
    if !api_key.is_empty() {
        let mut value = HeaderValue::from_str(api_key)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    Ok(client)
}
