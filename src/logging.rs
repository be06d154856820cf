//! File logging - the TUI owns stdout, so logs go to `bookshelf.log`

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

/// Open `bookshelf.log` in the configured log directory.
///
/// Fails when the directory can't be created or the file can't be opened
/// (e.g. `log_dir` points below a regular file, or is read-only).
pub fn log_file(config: &Config) -> anyhow::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&config.log_dir)
        .with_context(|| {
            format!(
                "Cannot open {} in log directory {}",
                LOG_FILE_NAME,
                config.log_dir.display()
            )
        })
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &Config) -> anyhow::Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file(config)?);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    Ok(guard)
}
