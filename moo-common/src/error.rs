use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MooError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("DownloadError: Failed to download '{0}' from '{1}': {2}")]
    DownloadError(String, String, String),

    #[error("Checksum Error: {0}")]
    IntegrityError(String),

    #[error("Extraction Error: {0}")]
    ExtractionError(String),

    #[error("Filesystem Error: {0}")]
    FilesystemError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Self-test failed: {0}")]
    SelfTestError(String),

    #[error("Failed to execute command: {0}")]
    CommandExecError(String),
}

/// Coarse classification of a [`MooError`], matching the failure classes an
/// install can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Integrity,
    Extraction,
    Filesystem,
    Other,
}

impl MooError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MooError::Http(_) | MooError::NetworkError(_) | MooError::DownloadError(..) => {
                ErrorKind::Network
            }
            MooError::IntegrityError(_) => ErrorKind::Integrity,
            MooError::ExtractionError(_) => ErrorKind::Extraction,
            MooError::Io(_) | MooError::FilesystemError(_) => ErrorKind::Filesystem,
            MooError::Json(_)
            | MooError::Config(_)
            | MooError::ValidationError(_)
            | MooError::NotFound(_)
            | MooError::SelfTestError(_)
            | MooError::CommandExecError(_) => ErrorKind::Other,
        }
    }

    /// Wraps an I/O failure with the operation and path it happened on.
    pub fn fs(action: &str, path: &std::path::Path, err: std::io::Error) -> Self {
        MooError::FilesystemError(format!("{action} {}: {err}", path.display()))
    }
}

impl From<std::io::Error> for MooError {
    fn from(err: std::io::Error) -> Self {
        MooError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for MooError {
    fn from(err: reqwest::Error) -> Self {
        MooError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for MooError {
    fn from(err: serde_json::Error) -> Self {
        MooError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, MooError>;
