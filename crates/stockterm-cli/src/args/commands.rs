use clap::Subcommand;
use std::path::PathBuf;

use super::FilterArgs;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive screen")]
    Screen {
        #[command(flatten)]
        filter: FilterArgs,

        /// Read the snapshot from a JSON export instead of the store
        #[arg(long)]
        source: Option<PathBuf>,
    },

    #[command(about = "Print the screened view of the latest snapshot")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print at most N rows
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        source: Option<PathBuf>,
    },

    #[command(about = "Show the full record of one stock")]
    Show {
        /// Stock code, e.g. BBCA
        code: String,

        #[arg(long)]
        source: Option<PathBuf>,
    },

    #[command(about = "Load a JSON export (file or directory) into the store")]
    Import {
        path: PathBuf,

        /// Snapshot date for records that carry none
        #[arg(long, value_parser = parse_snapshot_date)]
        date: Option<String>,
    },

    #[command(about = "List snapshot dates held in the store")]
    Dates,

    #[command(about = "List sectors, sub-sectors and tags of the latest snapshot")]
    Vocab {
        /// Only sub-sectors of this sector
        #[arg(long)]
        sector: Option<String>,

        #[arg(long)]
        source: Option<PathBuf>,
    },

    #[command(about = "List screening presets and their rules")]
    Presets,

    #[command(about = "Inspect or create the workspace config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default config.toml if none exists")]
    Init,
}

fn parse_snapshot_date(s: &str) -> Result<String, String> {
    stockterm_types::normalize_snapshot_date(s).map_err(|e| e.to_string())
}
