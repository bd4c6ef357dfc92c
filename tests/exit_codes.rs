//! Exit-code behavior at the binary boundary.
//!
//! An incompatible filter combination is the one intercepted, user-facing
//! error path: bare message on stderr, exit status 1. Everything runs in a
//! temporary working directory so the binary's config.json lands there.

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mass_hash_request"))
}

#[test]
fn test_incompatible_filter_combination_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .current_dir(dir.path())
        .args(["--domain", "example.com", "--filesize-above", "0"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim(), "Incompatible choice of parameters");
}

#[test]
fn test_no_query_parameters_exit_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .current_dir(dir.path())
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No query parameters given"));
}

#[test]
fn test_unknown_hash_type_exits_nonzero_before_any_query() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .current_dir(dir.path())
        .args(["--hash-type", "crc32"])
        .output()
        .expect("failed to run binary");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("crc32 is not a known hash"));
}
