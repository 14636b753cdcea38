//! Shared types for the Conch catalog console
//!
//! Common types used across the console, the HTTP client, and the mock
//! catalog server: product models, wire-level request/response types,
//! and the response envelope.

pub mod catalog;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::Product;
pub use response::CatalogResponse;
pub use serde::{Deserialize, Serialize};
