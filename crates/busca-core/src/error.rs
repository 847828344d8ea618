//! Error types for busca-core

use thiserror::Error;

/// Result type alias using busca-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying the student endpoint
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, send, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Search endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a JSON array of students
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
