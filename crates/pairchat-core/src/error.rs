//! Error types for pairchat.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSRF token missing: run the handshake or inject a token")]
    MissingCsrfToken,

    #[error("Session key missing: run the handshake first")]
    MissingSessionKey,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
