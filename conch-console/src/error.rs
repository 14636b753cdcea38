//! Console error types

use thiserror::Error;

/// Errors surfaced by console operations
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Catalog access attempted without a verified session
    #[error("Seller session not verified")]
    NotVerified,

    /// The catalog service rejected or failed a request
    #[error("Client error: {0}")]
    Client(#[from] conch_client::ClientError),

    /// Image ingestion failed before any network call
    #[error("Ingest error: {0}")]
    Ingest(#[from] crate::ingest::IngestError),
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
