// src/error.rs
use thiserror::Error;

/// The page could not be fetched. Surfaced to the user as "no data available".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed after {attempts} attempt(s): {source}")]
    Request {
        url: String,
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} kept answering HTTP {status}; gave up after {attempts} attempt(s)")]
    RetriesExhausted { url: String, status: u16, attempts: u32 },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Final HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::RetriesExhausted { status, .. } | FetchError::Status { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// The table-locating rule itself is unusable.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid table selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
