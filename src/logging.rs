use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to a log file. The TUI owns the terminal, so
/// nothing is logged unless a file is given. Level comes from `RUST_LOG`
/// (default `info`).
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_file_logging(path: &Path) -> std::io::Result<Option<WorkerGuard>> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other(format!("not a file path: {}", path.display())))?;
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(std::io::Error::other)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    // A subscriber already installed (e.g. by a test harness) keeps logging;
    // drop the guard so our writer shuts down.
    Ok(installed.ok().map(|_| guard))
}
