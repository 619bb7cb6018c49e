use std::fmt;
use std::path::PathBuf;

/// Result type for stockterm-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// A stored or imported document is not a valid record
    Decode(stockterm_types::Error),

    /// An import file has an unrecognized shape
    Format { path: PathBuf, reason: String },

    /// Query-specific error (invalid input, not found, etc.)
    Query(String),

    /// The snapshot source cannot answer; the reason is shown as is
    Unavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(
                        f,
                        "Database schema mismatch: {}. Run the command again to auto-migrate.",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Decode(err) => write!(f, "{}", err),
            Error::Format { path, reason } => {
                write!(f, "Unsupported import file {}: {}", path.display(), reason)
            }
            Error::Query(msg) => write!(f, "Query error: {}", msg),
            Error::Unavailable(reason) => f.write_str(reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Format { .. } | Error::Query(_) | Error::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<stockterm_types::Error> for Error {
    fn from(err: stockterm_types::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(stockterm_types::Error::Decode(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("no such table: stockmaster".to_string()),
        );
        let msg = Error::Database(sqlite_err).to_string();

        assert!(msg.contains("Database schema mismatch"));
        assert!(msg.contains("auto-migrate"));
    }

    #[test]
    fn test_regular_database_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("UNIQUE constraint failed".to_string()),
        );
        let msg = Error::Database(sqlite_err).to_string();

        assert!(msg.starts_with("Database error:"));
        assert!(!msg.contains("auto-migrate"));
    }
}
