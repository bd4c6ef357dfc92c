//! Archive output.
//!
//! Compresses the materialized output directory into a single gzip-compressed
//! tar archive, entry paths prefixed with the directory name so relative
//! paths survive extraction.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;

/// Archives `directory` recursively into a tar.gz file at `archive_path`.
pub fn write_archive(directory: &Path, archive_path: &Path) -> Result<()> {
    let Some(directory_name) = directory.file_name() else {
        bail!("Output directory {} has no name", directory.display());
    };

    let file = File::create(archive_path)
        .with_context(|| format!("Failed to create archive {}", archive_path.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder
        .append_dir_all(directory_name, directory)
        .with_context(|| format!("Failed to archive {}", directory.display()))?;

    let encoder = builder
        .into_inner()
        .context("Failed to finish archive stream")?;
    encoder.finish().context("Failed to finish compression")?;

    info!("wrote archive {}", archive_path.display());
    Ok(())
}
