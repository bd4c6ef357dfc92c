//! Remote sample client for the MASS API.
//!
//! [`MassClient`] wraps a blocking HTTP client with the MASS collection
//! endpoints: sample queries (paginated), report listings, and report-object
//! and sample-content downloads. Transport failures are not caught here; they
//! propagate to the top level and abort the run.

mod query;

pub use query::SampleKind;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error_handling::InitializationError;
use crate::initialization::init_client;
use crate::models::{Report, Sample};
use crate::query::QueryParameters;

/// One page of a paginated MASS collection response.
#[derive(Debug, Deserialize)]
struct Page<T> {
    results: Vec<T>,
    #[serde(default)]
    next: Option<String>,
}

/// Blocking client for a single MASS deployment.
pub struct MassClient {
    http: Client,
    base_url: Url,
}

impl MassClient {
    /// Creates a client for `base_url`, attaching `api_key` to every request.
    ///
    /// The base URL must parse and should end with a trailing slash so that
    /// endpoint joins resolve under it.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, InitializationError> {
        let base_url = Url::parse(base_url)?;
        let http = init_client(api_key)?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Cannot resolve endpoint {path} against the base URL"))
    }

    /// Queries the sample collection with the given filter parameters,
    /// following `next` links until the collection is exhausted.
    pub fn query_samples(&self, parameters: &QueryParameters) -> Result<Vec<Sample>> {
        self.collect_pages(self.endpoint("sample/")?, Some(parameters))
    }

    /// Lists all reports attached to a sample.
    pub fn reports(&self, sample_id: &str) -> Result<Vec<Report>> {
        self.collect_pages(self.endpoint(&format!("sample/{sample_id}/reports/"))?, None)
    }

    /// Downloads the file content of a file sample.
    pub fn download_sample(&self, sample_id: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(&format!("sample/{sample_id}/download/"))?;
        Self::fetch_bytes(self.http.get(url))
    }

    /// Fetches a named JSON report object by its reference URL.
    pub fn fetch_json_report_object(&self, url: &str) -> Result<serde_json::Value> {
        let url = self
            .base_url
            .join(url)
            .context("Invalid JSON report object reference")?;
        Self::fetch_json(self.http.get(url))
    }

    /// Fetches a named raw report object by its reference URL, byte-identical.
    pub fn fetch_raw_report_object(&self, url: &str) -> Result<Vec<u8>> {
        let url = self
            .base_url
            .join(url)
            .context("Invalid raw report object reference")?;
        Self::fetch_bytes(self.http.get(url))
    }

    fn collect_pages<T: DeserializeOwned>(
        &self,
        url: Url,
        parameters: Option<&QueryParameters>,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut request = self.http.get(url);
        if let Some(parameters) = parameters {
            request = request.query(parameters);
        }
        loop {
            let page: Page<T> = Self::fetch_json(request)?;
            items.extend(page.results);
            match page.next {
                Some(next) => {
                    let next_url = self
                        .base_url
                        .join(&next)
                        .context("Invalid pagination link in MASS response")?;
                    request = self.http.get(next_url);
                }
                None => break,
            }
        }
        Ok(items)
    }

    fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        Self::send(request)?
            .json()
            .context("Failed to decode MASS response body")
    }

    fn fetch_bytes(request: RequestBuilder) -> Result<Vec<u8>> {
        let bytes = Self::send(request)?
            .bytes()
            .context("Failed to read MASS response body")?;
        Ok(bytes.to_vec())
    }

    fn send(request: RequestBuilder) -> Result<reqwest::blocking::Response> {
        request
            .send()
            .context("Failed to reach the MASS server")?
            .error_for_status()
            .context("MASS request failed")
    }
}
