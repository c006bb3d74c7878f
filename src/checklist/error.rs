//! Errors at the edges of the engine
//!
//! The engine itself is total over any text. Only loading configuration,
//! reading and writing documents, and interpreting command-line input can fail.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Config(config::ConfigError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialization(serde_json::Error),
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::Serialization(err) => write!(f, "Serialization failed: {}", err),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Io { source, .. } => Some(source),
            Error::Serialization(err) => Some(err),
            Error::InvalidArgument(_) => None,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}
