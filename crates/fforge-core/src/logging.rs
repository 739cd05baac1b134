//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const DEFAULT_FILTER: &str =
    "flutter_forge=info,fforge_app=info,fforge_gen=info,fforge_server=info,fforge_tui=info,warn";

/// Initialize the logging subsystem for the terminal front end
///
/// Logs are written to `~/.local/share/flutter-forge/logs/` because the
/// terminal itself is owned by the TUI.
/// Log level is controlled by `FFORGE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FFORGE_LOG=debug cargo run
/// FFORGE_LOG=fforge_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "fforge.log");

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    banner(&log_dir);
    Ok(())
}

/// Initialize logging for the HTTP service: same rolling file plus stderr
pub fn init_with_stderr() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "fforge.log");

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    banner(&log_dir);
    Ok(())
}

fn env_filter() -> EnvFilter {
    // Default to info, allow override via FFORGE_LOG
    EnvFilter::try_from_env("FFORGE_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn banner(log_dir: &std::path::Path) {
    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Flutter Forge starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("flutter-forge").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("fforge.log"))
}
