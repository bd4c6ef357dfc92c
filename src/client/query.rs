//! Query dispatch: hash lookups and attribute-query variant selection.

use anyhow::Result;
use log::debug;

use super::MassClient;
use crate::error_handling::QueryError;
use crate::models::ResultSet;
use crate::query::QueryParameters;

/// Sample variants, in attribute-query precedence order.
///
/// Variant dispatch is an explicit ordered list of attempts: a variant whose
/// schema rejects the parameter set is skipped, and the first accepting
/// variant's query results are returned. Only exhausting all variants is
/// fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// The sample base class; accepts only the common filters.
    Generic,
    /// Domain samples.
    Domain,
    /// File samples.
    File,
    /// IP address samples.
    Ip,
    /// URI samples.
    Uri,
}

/// Filter keys every variant accepts.
const COMMON_PARAMETERS: [&str; 5] = [
    "delivery_date__lte",
    "delivery_date__gte",
    "first_seen__lte",
    "first_seen__gte",
    "tags__all",
];

impl SampleKind {
    /// Attribute-query precedence order.
    pub const PRECEDENCE: [SampleKind; 5] = [
        SampleKind::Generic,
        SampleKind::Domain,
        SampleKind::File,
        SampleKind::Ip,
        SampleKind::Uri,
    ];

    fn variant_parameters(self) -> &'static [&'static str] {
        match self {
            SampleKind::Generic => &[],
            SampleKind::Domain => &[
                "domain",
                "domain__contains",
                "domain__startswith",
                "domain__endswith",
            ],
            SampleKind::File => &[
                "mime_type",
                "file_names",
                "file_size__lte",
                "file_size__gte",
                "shannon_entropy__lte",
                "shannon_entropy__gte",
                "md5sum",
                "sha1sum",
                "sha256sum",
                "sha512sum",
            ],
            SampleKind::Ip => &["ip_address", "ip_address__startswith"],
            SampleKind::Uri => &["uri", "uri__contains", "uri__startswith", "uri__endswith"],
        }
    }

    /// Whether this variant's schema accepts every key in the parameter set.
    pub fn accepts(self, parameters: &QueryParameters) -> bool {
        parameters.keys().all(|key| {
            COMMON_PARAMETERS.contains(&key.as_str())
                || self.variant_parameters().contains(&key.as_str())
        })
    }
}

impl MassClient {
    /// Looks up each hash against the file-sample collection.
    ///
    /// Per hash, `{hash_algorithm}sum = hash` is merged over
    /// `extra_parameters` and queried. Exactly one match maps the hash to the
    /// sample; zero or multiple matches map it to absent. Result order
    /// follows the input order.
    pub fn query_for_hashes(
        &self,
        hash_algorithm: &str,
        hashes: &[String],
        extra_parameters: &QueryParameters,
    ) -> Result<ResultSet> {
        let sum_key = format!("{hash_algorithm}sum");
        let mut results = ResultSet::new();

        for hash in hashes {
            let mut parameters = extra_parameters.clone();
            parameters.insert(sum_key.clone(), hash.clone());

            let mut matches = self.query_samples(&parameters)?;
            if matches.len() == 1 {
                results.push((hash.clone(), Some(matches.remove(0))));
            } else {
                debug!("{} samples matched hash {hash}", matches.len());
                results.push((hash.clone(), None));
            }
        }

        Ok(results)
    }

    /// Queries samples by attribute filters.
    ///
    /// Variants are tried in [`SampleKind::PRECEDENCE`] order; the first one
    /// whose schema accepts the full parameter set issues the query, and its
    /// matches are returned keyed by sample id. If no variant accepts, the
    /// error is [`QueryError::IncompatibleParameters`], which the binary
    /// turns into exit status 1.
    pub fn query_for_attributes(&self, parameters: &QueryParameters) -> Result<ResultSet> {
        for kind in SampleKind::PRECEDENCE {
            if !kind.accepts(parameters) {
                debug!("{kind:?} rejects the parameter set, trying next variant");
                continue;
            }

            let samples = self.query_samples(parameters)?;
            return Ok(samples
                .into_iter()
                .map(|sample| (sample.id().to_string(), Some(sample)))
                .collect());
        }

        Err(QueryError::IncompatibleParameters.into())
    }
}
