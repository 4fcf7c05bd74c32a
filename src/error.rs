use thiserror::Error;

/// Failures of the remote wallet service. These never reach callers of the
/// public client operations; they are logged at the client boundary and the
/// operation degrades to an empty result.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Http(reqwest::StatusCode),

    #[error("service error (code {code}): {message}")]
    Envelope { code: i64, message: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
