use std::io;
use thiserror::Error;

/// Custom result type for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the MalShare client
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request URL could not be assembled
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failure (strict status mode only)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found (strict status mode only)
    #[error("Resource not found")]
    NotFound,

    /// Any other non-success status (strict status mode only)
    #[error("API error: {0}")]
    ServerError(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
