//! Query-parameter projection.
//!
//! Converts the CLI filter options into the sparse parameter mapping the MASS
//! API expects. Pure projection: unset options and empty strings are dropped,
//! everything else is passed through verbatim. Zero-valued numeric filters are
//! meaningful and retained.

use std::collections::BTreeMap;

use crate::config::Options;

/// MASS filter parameters, keyed by the server-side filter name.
pub type QueryParameters = BTreeMap<String, String>;

fn insert_if_set(parameters: &mut QueryParameters, key: &str, value: Option<String>) {
    // An empty string means the filter was not really given; numeric zero
    // renders as "0" and survives.
    if let Some(value) = value {
        if !value.is_empty() {
            parameters.insert(key.to_string(), value);
        }
    }
}

/// Projects the CLI filter options onto MASS filter parameters.
///
/// Only filters the user actually set appear in the result. No semantic
/// validation happens here; whether a parameter combination is acceptable is
/// decided per sample variant during query dispatch.
pub fn build_query_parameters(options: &Options) -> QueryParameters {
    let mut parameters = QueryParameters::new();

    insert_if_set(
        &mut parameters,
        "delivery_date__lte",
        options.delivered_before.map(|d| d.to_string()),
    );
    insert_if_set(
        &mut parameters,
        "delivery_date__gte",
        options.delivered_after.map(|d| d.to_string()),
    );
    insert_if_set(
        &mut parameters,
        "first_seen__lte",
        options.first_seen_before.map(|d| d.to_string()),
    );
    insert_if_set(
        &mut parameters,
        "first_seen__gte",
        options.first_seen_after.map(|d| d.to_string()),
    );
    insert_if_set(&mut parameters, "tags__all", options.tags.clone());
    insert_if_set(&mut parameters, "mime_type", options.mime_type.clone());
    insert_if_set(&mut parameters, "file_names", options.file_name.clone());
    insert_if_set(
        &mut parameters,
        "file_size__lte",
        options.filesize_below.map(|n| n.to_string()),
    );
    insert_if_set(
        &mut parameters,
        "file_size__gte",
        options.filesize_above.map(|n| n.to_string()),
    );
    insert_if_set(
        &mut parameters,
        "shannon_entropy__lte",
        options.entropy_below.map(|e| e.to_string()),
    );
    insert_if_set(
        &mut parameters,
        "shannon_entropy__gte",
        options.entropy_above.map(|e| e.to_string()),
    );
    insert_if_set(&mut parameters, "domain", options.domain.clone());
    insert_if_set(
        &mut parameters,
        "domain__contains",
        options.domain_contains.clone(),
    );
    insert_if_set(
        &mut parameters,
        "domain__startswith",
        options.domain_startswith.clone(),
    );
    insert_if_set(
        &mut parameters,
        "domain__endswith",
        options.domain_endswith.clone(),
    );
    insert_if_set(&mut parameters, "uri", options.uri.clone());
    insert_if_set(&mut parameters, "uri__contains", options.uri_contains.clone());
    insert_if_set(
        &mut parameters,
        "uri__startswith",
        options.uri_startswith.clone(),
    );
    insert_if_set(
        &mut parameters,
        "uri__endswith",
        options.uri_endswith.clone(),
    );
    insert_if_set(&mut parameters, "ip_address", options.ip.clone());
    insert_if_set(
        &mut parameters,
        "ip_address__startswith",
        options.ip_startswith.clone(),
    );

    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_no_options_yields_no_parameters() {
        let parameters = build_query_parameters(&Options::default());
        assert!(parameters.is_empty());
    }

    #[test]
    fn test_zero_valued_numeric_filter_is_retained() {
        let options = Options {
            filesize_above: Some(0),
            ..Default::default()
        };
        let parameters = build_query_parameters(&options);
        assert_eq!(parameters.get("file_size__gte").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_empty_string_filters_are_dropped() {
        // Empty strings are suppressed sentinels, same as unset options; an
        // empty --domain must not reach the server or steer variant dispatch.
        let options = Options {
            tags: Some(String::new()),
            domain: Some(String::new()),
            ..Default::default()
        };
        let parameters = build_query_parameters(&options);
        assert!(!parameters.contains_key("tags__all"));
        assert!(!parameters.contains_key("domain"));
        assert!(parameters.is_empty());
    }

    #[test]
    fn test_dates_render_as_iso() {
        let options = Options {
            delivered_before: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        };
        let parameters = build_query_parameters(&options);
        assert_eq!(
            parameters.get("delivery_date__lte").map(String::as_str),
            Some("2024-01-31")
        );
    }

    #[test]
    fn test_only_set_filters_are_projected() {
        let options = Options {
            tags: Some("trojan,pdf".to_string()),
            domain_endswith: Some(".example".to_string()),
            entropy_above: Some(7.5),
            ..Default::default()
        };
        let parameters = build_query_parameters(&options);
        assert_eq!(parameters.len(), 3);
        assert_eq!(
            parameters.get("tags__all").map(String::as_str),
            Some("trojan,pdf")
        );
        assert_eq!(
            parameters.get("domain__endswith").map(String::as_str),
            Some(".example")
        );
        assert_eq!(
            parameters.get("shannon_entropy__gte").map(String::as_str),
            Some("7.5")
        );
    }
}
