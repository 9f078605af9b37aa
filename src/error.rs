use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single landing-page or download step.
///
/// These never abort a run on their own; the orchestrator logs them next to
/// the offending URL and moves on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("status code error: {code} {reason}")]
    Status { code: u16, reason: String },

    /// The landing page body could not be read to the end or decoded as
    /// text. The HTML parser itself accepts any markup, so this is the only
    /// way a page fails to parse.
    #[error("failed to parse landing page: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("downloadable URL not found")]
    LinkNotFound,

    #[error("missing Content-Length header")]
    MissingContentLength,

    #[error("invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),

    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl Error {
    /// Builds a `Status` error from a non-200 response status.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Error::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
