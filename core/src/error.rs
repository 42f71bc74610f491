//! Error types for the opiniones API client.
//!
//! # Design
//! Connection problems and non-2xx statuses are kept apart so logs say which
//! side failed. None of these reach store observers: a `Container` converts
//! every variant into its fixed, user-facing message.

use thiserror::Error;

/// Errors produced while executing or parsing an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// timeout, invalid URL).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not a JSON array of records.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Status code of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}
