//! Logging setup.
//!
//! Text modes log to stderr. The terminal UI owns the screen, so it logs to
//! a file in the platform data directory instead.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "office-escape.log";

/// `RUST_LOG` if set, otherwise a level chosen by `-v` count.
fn env_filter(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr.
pub fn init_stderr(verbosity: u8) {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log to a file, for the terminal UI.
pub fn init_file(verbosity: u8) -> Result<(), String> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("failed to create log directory {}: {e}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    // Keep the writer alive until exit
    std::mem::forget(guard);

    tracing::info!("logging to {}", dir.join(LOG_FILE).display());
    Ok(())
}

fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "office-escape")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
