use std::path::Path;

use color_eyre::eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::infra::config::paths::ensure_log_dir;

const LOG_FILE_NAME: &str = "redshift-setup.log";

/// Logs go to a file: the terminal is owned by the form while it runs.
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init(config_dir: &Path) -> Result<WorkerGuard> {
    let log_dir = ensure_log_dir(config_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
