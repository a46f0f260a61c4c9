use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Not an image file: {0}")]
    InvalidPath(PathBuf),
}

impl ApiError {
    /// Whether a retry from the UI could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Http(err) => err.is_timeout() || err.is_connect(),
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
