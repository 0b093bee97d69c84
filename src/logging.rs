//! Tracing setup
//!
//! The TUI owns the terminal, so interactive sessions log to a file under
//! the user's data directory. CLI runs log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "CINEPLEX_LOG";

/// Log file path (~/.local/share/cineplex/cineplex.log)
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("cineplex").join("cineplex.log"))
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize file logging for TUI mode.
///
/// Returns the log path on success. Safe to call more than once; only the
/// first subscriber is installed.
pub fn init_file(default_directive: &str) -> Result<PathBuf> {
    let path = log_path().ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(path)
}

/// Initialize stderr logging for CLI mode
pub fn init_stderr(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
