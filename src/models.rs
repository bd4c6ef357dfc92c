//! Data model for MASS resources.
//!
//! Samples and reports deserialize directly from the shapes the MASS API
//! returns. Sample variants are discriminated by the `_class` field rather
//! than runtime type inspection.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// A lookup key in a [`ResultSet`]: the queried hash sum, or the sample id
/// when filtering by attributes.
pub type QueryKey = String;

/// Mapping from query key to the matched sample, if any.
///
/// Entries follow input order. Built once per invocation and consumed
/// read-only by the materializer.
pub type ResultSet = Vec<(QueryKey, Option<Sample>)>;

/// A sample record returned by the MASS API.
///
/// An absent match for a query key is modeled as `Option<Sample>` in the
/// [`ResultSet`], never as an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_class")]
pub enum Sample {
    /// A file submitted for analysis; content is downloaded separately.
    #[serde(rename = "Sample.FileSample")]
    File {
        /// Unique sample id.
        id: String,
        /// File names the sample is known under. The first entry names the
        /// materialized file.
        file_names: Vec<String>,
    },
    /// A domain name.
    #[serde(rename = "Sample.DomainSample")]
    Domain {
        /// Unique sample id.
        id: String,
        /// The domain string.
        domain: String,
    },
    /// An IP address.
    #[serde(rename = "Sample.IPSample")]
    Ip {
        /// Unique sample id.
        id: String,
        /// The address string.
        ip_address: String,
    },
    /// A URI.
    #[serde(rename = "Sample.URISample")]
    Uri {
        /// Unique sample id.
        id: String,
        /// The URI string.
        uri: String,
    },
    /// A sample of the base class, carrying no variant payload.
    #[serde(rename = "Sample")]
    Generic {
        /// Unique sample id.
        id: String,
    },
}

impl Sample {
    /// The unique id common to all variants.
    pub fn id(&self) -> &str {
        match self {
            Sample::File { id, .. }
            | Sample::Domain { id, .. }
            | Sample::Ip { id, .. }
            | Sample::Uri { id, .. }
            | Sample::Generic { id } => id,
        }
    }
}

/// An analysis report attached to a sample.
///
/// `analysis_system` is URL-shaped; the owning system's name is the path
/// segment following `/analysis_system/`. The two report-object collections
/// map object names to their download URLs and are disjoint by contract.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    /// Unique report id.
    pub id: String,
    /// URL-shaped reference to the analysis system that produced the report.
    pub analysis_system: String,
    /// Named JSON-valued report objects (name to URL).
    #[serde(default)]
    pub json_report_objects: BTreeMap<String, String>,
    /// Named raw-byte report objects (name to URL).
    #[serde(default)]
    pub raw_report_objects: BTreeMap<String, String>,
}

static ANALYSIS_SYSTEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/analysis_system/([^/]*)/").expect("valid regex"));

impl Report {
    /// Extracts the analysis-system name from the URL-shaped reference.
    ///
    /// Returns `None` when the reference does not contain an
    /// `/analysis_system/{name}/` segment.
    pub fn analysis_system_name(&self) -> Option<&str> {
        ANALYSIS_SYSTEM
            .captures(&self.analysis_system)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}
