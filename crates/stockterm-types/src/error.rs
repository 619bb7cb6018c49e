use std::fmt;

/// Result type for stockterm-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A record payload could not be decoded
    Decode(serde_json::Error),

    /// A textual value is not part of a closed vocabulary (action, ...)
    InvalidValue { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "Decode error: {}", err),
            Error::InvalidValue { kind, value } => write!(f, "Invalid {}: '{}'", kind, value),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            Error::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
