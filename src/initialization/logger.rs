//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::fs;
use std::io::Write;
use std::path::Path;

use colored::Colorize;
use log::LevelFilter;

use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and optional file target.
///
/// Configures `env_logger` with custom formatting. The logger reads from the
/// `RUST_LOG` environment variable by default, but the provided `level`
/// overrides it, so explicit CLI control via `--log-level` wins while
/// `RUST_LOG=debug` still works for quick debugging.
///
/// With a `log_file`, output goes to that file in a timestamped plain format
/// (parent directories are created as needed). Without one, output goes to
/// stderr with colored levels.
///
/// # Errors
///
/// Returns `InitializationError::LoggerSetupError` if the log file cannot be
/// created, or `InitializationError::LoggerError` if the logger is already
/// installed.
pub fn init_logger_with(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<(), InitializationError> {
    // Read from RUST_LOG first, then override with the CLI-provided level
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("mass_hash_request", level);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| {
                        InitializationError::LoggerSetupError(format!(
                            "Failed to create log directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
            let file = fs::File::create(path).map_err(|e| {
                InitializationError::LoggerSetupError(format!(
                    "Failed to create log file {}: {e}",
                    path.display()
                ))
            })?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "[{}][{}][{}]: {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.target(),
                    record.level(),
                    record.args()
                )
            });
        }
        None => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() instead of init(): tests may initialize the logger more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
