use thiserror::Error;

/// Errors produced by the forge and its components.
///
/// Only transport-level failures surface through this type during a run:
/// malformed records are dropped by validation, and extraction failures are
/// carried as data ([`Extraction::Failed`](crate::extract::Extraction)) so
/// callers can degrade instead of aborting.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Low-level HTTP transport failure (connection refused, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed at the serde level.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure while writing the output artifact.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error with status code and response body.
    ///
    /// Returned by [`Backend`](crate::backend::Backend) implementations and
    /// the source fetch when the remote returns a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpError {
        /// HTTP status code (e.g. 404, 500, 503).
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The source endpoint returned a JSON document that is not an array.
    #[error("Expected a JSON array of monster records, got: {0}")]
    NotAnArray(String),

    /// Catch-all for other errors.
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for ForgeError {
    fn from(err: anyhow::Error) -> Self {
        ForgeError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;
