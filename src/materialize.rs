//! Filesystem materialization of query results.
//!
//! Builds the output directory tree for a [`ResultSet`]:
//!
//! ```text
//! {root}/{key}/SampleNotFound                       (absent case)
//! {root}/{key}/Reports/{analysisSystem}/{name}.json
//! {root}/{key}/Reports/{analysisSystem}/{rawName}
//! {root}/{key}/Sample/{fileName}                      (file samples)
//! {root}/{key}/Domain.txt | IPAddress.txt | URI.txt   (non-file samples)
//! ```
//!
//! Writes are not transactional; a failure partway through leaves a partially
//! populated tree behind.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::client::MassClient;
use crate::models::{ResultSet, Sample};
use crate::utils::to_json_pretty;

/// Marker file written when a query key matched no sample.
const SAMPLE_NOT_FOUND: &str = "SampleNotFound";

/// Materializes the result set as a directory tree under `root`.
///
/// Each key gets its own subdirectory. Absent results are marked with a
/// zero-byte `SampleNotFound` file (and the key is printed to stdout when
/// `print_missing` is set); present results get their reports and content
/// written out, fetching from `client` as needed.
pub fn materialize_results(
    root: &Path,
    results: &ResultSet,
    client: &MassClient,
    print_missing: bool,
) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create output directory {}", root.display()))?;

    for (key, result) in results {
        let key_dir = root.join(key);
        fs::create_dir_all(&key_dir)
            .with_context(|| format!("Failed to create directory {}", key_dir.display()))?;

        match result {
            Some(sample) => {
                debug!("materializing sample {} for key {key}", sample.id());
                materialize_sample(&key_dir, sample, client)?;
            }
            None => {
                File::create(key_dir.join(SAMPLE_NOT_FOUND)).with_context(|| {
                    format!("Failed to create marker file under {}", key_dir.display())
                })?;
                if print_missing {
                    println!("{key}");
                }
            }
        }
    }

    Ok(())
}

fn materialize_sample(key_dir: &Path, sample: &Sample, client: &MassClient) -> Result<()> {
    write_reports(key_dir, sample.id(), client)?;

    match sample {
        Sample::File { id, file_names } => {
            let Some(file_name) = file_names.first() else {
                bail!("File sample {id} has no file names");
            };
            let sample_dir = key_dir.join("Sample");
            fs::create_dir_all(&sample_dir)
                .with_context(|| format!("Failed to create {}", sample_dir.display()))?;
            let content = client.download_sample(id)?;
            fs::write(sample_dir.join(file_name), content)
                .with_context(|| format!("Failed to write sample content for {id}"))?;
        }
        Sample::Domain { domain, .. } => {
            fs::write(key_dir.join("Domain.txt"), domain).context("Failed to write Domain.txt")?;
        }
        Sample::Ip { ip_address, .. } => {
            fs::write(key_dir.join("IPAddress.txt"), ip_address)
                .context("Failed to write IPAddress.txt")?;
        }
        Sample::Uri { uri, .. } => {
            fs::write(key_dir.join("URI.txt"), uri).context("Failed to write URI.txt")?;
        }
        Sample::Generic { .. } => {
            fs::write(key_dir.join("Sample.txt"), "").context("Failed to write Sample.txt")?;
        }
    }

    Ok(())
}

fn write_reports(key_dir: &Path, sample_id: &str, client: &MassClient) -> Result<()> {
    let reports = client.reports(sample_id)?;

    // `Reports/` appears only when at least one report exists; the per-system
    // directory creation below is what brings it into existence.
    let reports_dir = key_dir.join("Reports");

    for report in &reports {
        let Some(system) = report.analysis_system_name() else {
            bail!(
                "Report {} has no recognizable analysis system: {}",
                report.id,
                report.analysis_system
            );
        };
        let system_dir = reports_dir.join(system);
        fs::create_dir_all(&system_dir)
            .with_context(|| format!("Failed to create {}", system_dir.display()))?;

        for (name, url) in &report.json_report_objects {
            let object = client
                .fetch_json_report_object(url)
                .with_context(|| format!("Failed to fetch JSON report object {name}"))?;
            fs::write(system_dir.join(format!("{name}.json")), to_json_pretty(&object)?)
                .with_context(|| format!("Failed to write JSON report object {name}"))?;
        }

        for (name, url) in &report.raw_report_objects {
            let bytes = client
                .fetch_raw_report_object(url)
                .with_context(|| format!("Failed to fetch raw report object {name}"))?;
            fs::write(system_dir.join(name), bytes)
                .with_context(|| format!("Failed to write raw report object {name}"))?;
        }
    }

    Ok(())
}
