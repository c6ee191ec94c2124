//! 日志初始化
//!
//! `tracing` events and `log` records from the library crates both end up in
//! the log file; the filter comes from `CEP_LOOKUP_LOG` (default `info`).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_LOG_FILTER: &str = "CEP_LOOKUP_LOG";

/// Starts file logging at `path`. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .context("log path has no file name")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init also installs the `log` -> `tracing` bridge
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("logger already initialised")?;

    Ok(guard)
}
