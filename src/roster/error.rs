use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    /// Local pre-flight validation failure. Never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The request could not be completed at all (connect failure, DNS,
    /// malformed response body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server responded but refused the request. The response body is
    /// not parsed for structured detail.
    #[error("server returned HTTP {status}")]
    Remote { status: u16 },

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Editor error: {0}")]
    Editor(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
