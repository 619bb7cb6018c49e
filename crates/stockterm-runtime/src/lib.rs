pub mod config;
pub mod error;
pub mod fetch;
pub mod screener;
pub mod workspace;

pub use config::{Config, DisplayConfig, StoreConfig, ViewConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use fetch::{FetchOutcome, LoadState, SnapshotFetcher};
pub use screener::{ScreenStatus, Screener};
pub use workspace::Workspace;
