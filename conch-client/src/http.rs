//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::catalog::{
    CreateProductRequest, DeleteProductRequest, LogoutRequest, ProductListResponse,
    StockUpdateRequest, VerifySellerRequest, VerifySellerResponse,
};
use shared::{CatalogResponse, Product};
use tokio_util::sync::CancellationToken;

/// HTTP client for making network requests to the catalog service
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    cancel: CancellationToken,
}

impl CatalogClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the cancellation token; pending requests abort when it fires
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Send a request unless the client has already been cancelled
    async fn send(&self, request: RequestBuilder) -> ClientResult<reqwest::Response> {
        if self.cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        tokio::select! {
            _ = self.cancel.cancelled() => Err(ClientError::Cancelled),
            response = request.send() => Ok(response?),
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.send(self.client.get(&url)).await?;

        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.send(self.client.post(&url).json(body)).await?;

        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.send(self.client.put(&url).json(body)).await?;

        Self::handle_response(response).await
    }

    /// Make a POST request where success is signalled by the status alone
    pub async fn post_ok<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.send(self.client.post(&url).json(body)).await?;

        Self::check_status(response).await
    }

    /// Make a PUT request where success is signalled by the status alone
    pub async fn put_ok<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.send(self.client.put(&url).json(body)).await?;

        Self::check_status(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::map_error_status(response).await?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Handle a response whose body carries no success signal
    async fn check_status(response: reqwest::Response) -> ClientResult<()> {
        Self::map_error_status(response).await.map(|_| ())
    }

    async fn map_error_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, "catalog request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(response)
    }

    // ========== Catalog API ==========

    /// Verify that the seller session is still active
    pub async fn verify_seller(&self, seller_id: &str) -> ClientResult<bool> {
        let request = VerifySellerRequest {
            seller_id: seller_id.to_string(),
        };

        let response: VerifySellerResponse = self.post("admin/verify-seller", &request).await?;
        Ok(response.is_verified())
    }

    /// Fetch the full product catalog
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let response: ProductListResponse = self.get("get-product").await?;
        Ok(response.products)
    }

    /// Persist the editable fields of a product
    pub async fn update_product(&self, update: &StockUpdateRequest) -> ClientResult<()> {
        self.put_ok("instock-update", update).await
    }

    /// Delete a product; rejection travels inside the envelope, not as an error
    pub async fn delete_product(
        &self,
        product_id: &str,
    ) -> ClientResult<CatalogResponse<serde_json::Value>> {
        let request = DeleteProductRequest {
            product_key: product_id.to_string(),
        };

        self.post("delete-product", &request).await
    }

    /// Create a new product
    pub async fn create_product(&self, product: &Product) -> ClientResult<()> {
        let request = CreateProductRequest {
            product_data: product.clone(),
        };

        self.post_ok("create-product", &request).await
    }

    /// End the seller session on the server
    pub async fn logout(&self, seller_id: &str) -> ClientResult<()> {
        let request = LogoutRequest {
            seller_id: seller_id.to_string(),
        };

        self.post_ok("admin/logout", &request).await
    }
}
