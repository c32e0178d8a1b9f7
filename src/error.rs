use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("{0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Coarse classification of a failure, kept alongside the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    NotFound,
    Malformed,
    Api,
    Storage,
}

impl ExplorerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExplorerError::Validation(_) => ErrorKind::Validation,
            ExplorerError::NotFound(_) => ErrorKind::NotFound,
            ExplorerError::ApiError(_) => ErrorKind::Api,
            ExplorerError::MalformedResponse(_) | ExplorerError::JsonError(_) => {
                ErrorKind::Malformed
            }
            ExplorerError::NetworkError(_) | ExplorerError::InvalidBaseUrl(_) => ErrorKind::Network,
            ExplorerError::IoError(_) | ExplorerError::StorageError(_) => ErrorKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
