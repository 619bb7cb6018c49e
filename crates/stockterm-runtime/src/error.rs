use std::fmt;

/// Result type for stockterm-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Snapshot store error
    Store(stockterm_store::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// A snapshot fetch is already outstanding
    FetchInFlight,

    /// The snapshot fetch failed; the reason is surfaced verbatim
    Fetch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::FetchInFlight => write!(f, "A snapshot fetch is already in progress"),
            Error::Fetch(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::FetchInFlight | Error::Fetch(_) => None,
        }
    }
}

impl From<stockterm_store::Error> for Error {
    fn from(err: stockterm_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
