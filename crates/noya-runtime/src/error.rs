use std::fmt;

/// Result type for noya-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Store layer error
    Store(noya_store::Error),

    /// Types layer error (paths, dates)
    Types(noya_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Authentication failed or account conflict
    Auth(String),

    /// Operation requires a signed-in user
    NotSignedIn,

    /// Document does not exist for the signed-in user
    NotFound(String),

    /// Rejected input (empty name, ambiguous id, ...)
    InvalidInput(String),

    /// Live query could not be started
    Watch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            Error::NotSignedIn => write!(f, "Not signed in. Run 'noya auth signin' first."),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Watch(msg) => write!(f, "Watch error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::Auth(_)
            | Error::NotSignedIn
            | Error::NotFound(_)
            | Error::InvalidInput(_)
            | Error::Watch(_) => None,
        }
    }
}

impl From<noya_store::Error> for Error {
    fn from(err: noya_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<noya_types::Error> for Error {
    fn from(err: noya_types::Error) -> Self {
        Error::Types(err)
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

impl From<notify::Error> for Error {
    fn from(err: notify::Error) -> Self {
        Error::Watch(err.to_string())
    }
}
