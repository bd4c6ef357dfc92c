//! Small shared helpers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Serializes `value` as JSON with 4-space indentation.
///
/// Used for the settings file and for JSON report objects, which the output
/// contract specifies as pretty-printed.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize value to JSON")?;
    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}

/// Reads hash sums from a newline-delimited file.
///
/// Each line is trimmed of surrounding whitespace; blank lines are skipped.
/// The format is agnostic about the hash algorithm.
pub fn read_hash_sums(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open hash file {}", path.display()))?;
    let mut hashes = Vec::new();
    for line in BufReader::new(file).lines() {
        let line =
            line.with_context(|| format!("Failed to read from hash file {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        hashes.push(trimmed.to_string());
    }
    Ok(hashes)
}
