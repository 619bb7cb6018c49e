// Snapshot store
// One table of dated record documents; the latest date is the live snapshot.

mod db;
pub mod error;
pub mod import;
mod queries;
mod schema;
pub mod source;

// Public API
pub use db::{Database, DateSummary};
pub use error::{Error, Result};
pub use import::{latest_batch, load_documents};
pub use source::{JsonFileSource, MemorySource, SnapshotSource, SqliteSource};
