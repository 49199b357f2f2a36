//! File logging for the TUI
//!
//! The terminal is owned by the UI, so diagnostics go to a daily log file
//! instead of stderr.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn log_dir() -> std::io::Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .map(|d| d.join("tipboard").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tipboard").join("logs"));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Install the file subscriber. The returned guard flushes the writer on drop
/// and must live until exit. Returns `None` (and logs nowhere) if the log
/// directory can't be created.
pub fn init() -> Option<WorkerGuard> {
    let log_dir = log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "tipboard-tui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tipboard=debug"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(guard)
}
