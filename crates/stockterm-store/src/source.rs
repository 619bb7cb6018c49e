use std::path::{Path, PathBuf};

use stockterm_types::Snapshot;

use crate::import::{latest_batch, load_documents};
use crate::{Database, Error, Result};

/// Access to the most recent dated batch of records.
///
/// Implementations are handed to the fetch worker explicitly; none of them
/// keeps a process-wide connection.
pub trait SnapshotSource: Send + Sync {
    /// Short human-readable origin, used in logs and the status line.
    fn describe(&self) -> String;

    fn fetch_latest_snapshot(&self) -> Result<Snapshot>;
}

/// SQLite store. A fresh connection is opened for every fetch.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for SqliteSource {
    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    fn fetch_latest_snapshot(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Err(Error::Unavailable(format!(
                "snapshot store not found at {} (run `stockterm import <file>` first)",
                self.path.display()
            )));
        }
        Database::open(&self.path)?.latest_snapshot()
    }
}

/// A JSON export read straight from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }

    fn fetch_latest_snapshot(&self) -> Result<Snapshot> {
        let (date, records) = latest_batch(load_documents(&self.path)?);
        Ok(Snapshot::new(date, records))
    }
}

/// Fixed in-memory result, for tests and embedding.
#[derive(Debug, Clone)]
pub struct MemorySource {
    result: std::result::Result<Snapshot, String>,
}

impl MemorySource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
        }
    }
}

impl SnapshotSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn fetch_latest_snapshot(&self) -> Result<Snapshot> {
        self.result.clone().map_err(Error::Unavailable)
    }
}
