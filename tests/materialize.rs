//! Output-layout tests for the filesystem materializer.
//!
//! Report listings, report objects, and sample content are served by a mock
//! MASS server; the assertions check the bit-exact directory contract.

use std::fs;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use mass_hash_request::{materialize_results, MassClient, ResultSet, Sample};

fn client_for(server: &Server) -> MassClient {
    MassClient::new(&format!("http://{}/api/", server.addr()), "").unwrap()
}

fn empty_reports(server: &Server, reports_path: &'static str) {
    server.expect(
        Expectation::matching(request::method_path("GET", reports_path))
            .respond_with(json_encoded(json!({"results": []}))),
    );
}

#[test]
fn test_generate_file_structure() {
    let server = Server::run();

    let report = json!({
        "id": "ffff_report",
        "analysis_system": "http://localhost/api/analysis_system/some_system/",
        "json_report_objects": {
            "some_report": "/api/report/ffff_report/json_report_object/some_report/"
        },
        "raw_report_objects": {
            "dump": "/api/report/ffff_report/raw_report_object/dump/"
        }
    });

    server.expect(
        Expectation::matching(request::method_path("GET", "/api/sample/ffff/reports/"))
            .respond_with(json_encoded(json!({"results": [report]}))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/sample/ffff/download/"))
            .respond_with(status_code(200).body("file_content")),
    );
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/api/report/ffff_report/json_report_object/some_report/",
        ))
        .respond_with(json_encoded(json!({"hello": "world"}))),
    );
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/api/report/ffff_report/raw_report_object/dump/",
        ))
        .respond_with(status_code(200).body(vec![0u8, 1, 2, 255])),
    );

    let results: ResultSet = vec![
        (
            "ffff".to_string(),
            Some(Sample::File {
                id: "ffff".to_string(),
                file_names: vec!["file.pdf".to_string()],
            }),
        ),
        ("aaaa".to_string(), None),
    ];

    let base_dir = tempfile::tempdir().unwrap();
    let client = client_for(&server);
    materialize_results(base_dir.path(), &results, &client, false).unwrap();

    let sample_path = base_dir.path().join("ffff/Sample/file.pdf");
    assert_eq!(fs::read_to_string(&sample_path).unwrap(), "file_content");

    let report_path = base_dir
        .path()
        .join("ffff/Reports/some_system/some_report.json");
    let report_contents = fs::read_to_string(&report_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report_contents).unwrap();
    assert_eq!(parsed, json!({"hello": "world"}));
    // Pretty-printed with 4-space indentation.
    assert!(report_contents.contains("    \"hello\""));

    let raw_path = base_dir.path().join("ffff/Reports/some_system/dump");
    assert_eq!(fs::read(&raw_path).unwrap(), vec![0u8, 1, 2, 255]);

    let marker = base_dir.path().join("aaaa/SampleNotFound");
    assert!(marker.exists());
    assert_eq!(fs::metadata(&marker).unwrap().len(), 0);

    // The absent key's directory holds nothing but the marker.
    let entries: Vec<_> = fs::read_dir(base_dir.path().join("aaaa"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("SampleNotFound")]);
}

#[test]
fn test_sample_with_no_reports_gets_no_reports_directory() {
    let server = Server::run();
    empty_reports(&server, "/api/sample/ffff/reports/");
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/sample/ffff/download/"))
            .respond_with(status_code(200).body("content")),
    );

    let results: ResultSet = vec![(
        "ffff".to_string(),
        Some(Sample::File {
            id: "ffff".to_string(),
            file_names: vec!["file.pdf".to_string()],
        }),
    )];

    let base_dir = tempfile::tempdir().unwrap();
    materialize_results(base_dir.path(), &results, &client_for(&server), false).unwrap();

    assert!(base_dir.path().join("ffff/Sample/file.pdf").exists());
    assert!(!base_dir.path().join("ffff/Reports").exists());
}

#[test]
fn test_non_file_samples_write_single_text_files() {
    let server = Server::run();
    empty_reports(&server, "/api/sample/d1/reports/");
    empty_reports(&server, "/api/sample/i1/reports/");
    empty_reports(&server, "/api/sample/u1/reports/");
    empty_reports(&server, "/api/sample/g1/reports/");

    let results: ResultSet = vec![
        (
            "d1".to_string(),
            Some(Sample::Domain {
                id: "d1".to_string(),
                domain: "example.com".to_string(),
            }),
        ),
        (
            "i1".to_string(),
            Some(Sample::Ip {
                id: "i1".to_string(),
                ip_address: "10.0.0.1".to_string(),
            }),
        ),
        (
            "u1".to_string(),
            Some(Sample::Uri {
                id: "u1".to_string(),
                uri: "http://example.com/a".to_string(),
            }),
        ),
        ("g1".to_string(), Some(Sample::Generic { id: "g1".to_string() })),
    ];

    let base_dir = tempfile::tempdir().unwrap();
    materialize_results(base_dir.path(), &results, &client_for(&server), false).unwrap();

    assert_eq!(
        fs::read_to_string(base_dir.path().join("d1/Domain.txt")).unwrap(),
        "example.com"
    );
    assert_eq!(
        fs::read_to_string(base_dir.path().join("i1/IPAddress.txt")).unwrap(),
        "10.0.0.1"
    );
    assert_eq!(
        fs::read_to_string(base_dir.path().join("u1/URI.txt")).unwrap(),
        "http://example.com/a"
    );
    assert_eq!(
        fs::read_to_string(base_dir.path().join("g1/Sample.txt")).unwrap(),
        ""
    );
    // Text files sit directly under the key directory, no Sample/ nesting.
    assert!(!base_dir.path().join("d1/Sample").exists());
}

#[test]
fn test_file_sample_without_file_names_is_fatal() {
    let server = Server::run();
    empty_reports(&server, "/api/sample/ffff/reports/");

    let results: ResultSet = vec![(
        "ffff".to_string(),
        Some(Sample::File {
            id: "ffff".to_string(),
            file_names: Vec::new(),
        }),
    )];

    let base_dir = tempfile::tempdir().unwrap();
    let err = materialize_results(base_dir.path(), &results, &client_for(&server), false)
        .unwrap_err();
    assert!(err.to_string().contains("no file names"));
}

#[test]
fn test_report_with_unrecognizable_analysis_system_is_fatal() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/sample/ffff/reports/"))
            .respond_with(json_encoded(json!({
                "results": [{
                    "id": "broken_report",
                    "analysis_system": "http://localhost/api/not_a_system/",
                    "json_report_objects": {},
                    "raw_report_objects": {}
                }]
            }))),
    );

    let results: ResultSet = vec![(
        "ffff".to_string(),
        Some(Sample::File {
            id: "ffff".to_string(),
            file_names: vec!["file.pdf".to_string()],
        }),
    )];

    let base_dir = tempfile::tempdir().unwrap();
    let err = materialize_results(base_dir.path(), &results, &client_for(&server), false)
        .unwrap_err();
    assert!(err.to_string().contains("analysis system"));
}
