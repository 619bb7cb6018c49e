// NOTE: Command Organization
//
// Flat verbs for the everyday path (screen, list, show, import), one
// namespace (`config`) for workspace housekeeping. Filter flags are shared by
// `screen` and `list` so a console query can be reopened interactively as-is.

mod commands;
mod filter;

pub use commands::*;
pub use filter::FilterArgs;

use clap::Parser;
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "stockterm")]
#[command(about = "Screen, rank and inspect a stock fundamentals snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory (defaults to $STOCKTERM_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Snapshot database, overriding the workspace config
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
