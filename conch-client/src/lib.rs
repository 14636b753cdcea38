//! Conch Client - HTTP client for the seller catalog API
//!
//! Provides network-based HTTP calls to the catalog service endpoints.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::CatalogClient;

// Re-export shared types for convenience
pub use shared::catalog::{ProductListResponse, StockUpdateRequest, VerifySellerResponse};
pub use shared::{CatalogResponse, Product};
