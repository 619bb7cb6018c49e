//! Subscriber setup. Library crates only emit through the `tracing` facade.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// `RUST_LOG` wins over `--log-level`.
fn build_filter(level: LogLevel) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level.to_string())
}

/// Console commands: human-readable events on stderr, stdout stays data.
pub fn init_console(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Interactive screen: the terminal belongs to the UI, so events go to a file.
pub fn init_file(level: LogLevel, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
