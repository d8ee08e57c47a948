use std::fmt;

/// Result type for noya-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Document path did not match `users/{uid}[/spaces/{id}[/progress_reports/{id}]]`
    InvalidPath(String),

    /// Timestamp or calendar date could not be parsed
    InvalidTimestamp(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPath(path) => write!(f, "Invalid document path: {}", path),
            Error::InvalidTimestamp(value) => write!(
                f,
                "Invalid date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
                value
            ),
        }
    }
}

impl std::error::Error for Error {}
