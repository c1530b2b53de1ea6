use crate::shared::paths::get_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking log writer alive. Hold for the process lifetime;
/// dropping it flushes and stops the background writer thread.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Installs the global tracing subscriber: daily-rolling `quadro.log` under
/// the log directory, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() -> LoggingGuard {
    let log_dir = get_log_dir();

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir).expect("Failed to create logs directory");
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "quadro.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    tracing::info!(target: "board", "Logging initialized at {:?}", log_dir);

    LoggingGuard { _guard: guard }
}
