//! Client error types

use thiserror::Error;

/// Errors returned by the catalog client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an unexpected response
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Seller session was rejected (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Operation not allowed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request validation failed (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side error (5xx)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Request was cancelled before completing
    #[error("Request cancelled")]
    Cancelled,

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
