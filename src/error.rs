use crate::domain::ClassId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed data: {0}")]
    Format(String),

    #[error("Unknown identifier: {0}")]
    Lookup(ClassId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Prediction request failed: {0}")]
    Prediction(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl AppError {
    /// Map an I/O failure on `path`, keeping "missing" distinct from other failures.
    pub(crate) fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(path)
        } else {
            AppError::Io { path, source }
        }
    }
}
