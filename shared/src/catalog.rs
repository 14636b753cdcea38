//! Catalog API types shared between console and server
//!
//! Request/response bodies for the seller catalog endpoints.
//! These types are shared between conch-api-mock and conch-client.

use serde::{Deserialize, Serialize};

// Re-export the product model alongside its wire types
pub use crate::models::Product;

// =============================================================================
// Session API DTOs
// =============================================================================

/// POST /admin/verify-seller request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySellerRequest {
    pub seller_id: String,
}

/// POST /admin/verify-seller response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySellerResponse {
    #[serde(default)]
    pub logged_in: String,
}

impl VerifySellerResponse {
    /// Marker value for an affirmative verification
    pub const LOGGED_IN: &'static str = "loggedin";

    /// Whether the seller session stands. Anything other than the exact
    /// marker counts as a denial.
    pub fn is_verified(&self) -> bool {
        self.logged_in == Self::LOGGED_IN
    }
}

/// POST /admin/logout request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub seller_id: String,
}

// =============================================================================
// Product API DTOs
// =============================================================================

/// GET /get-product response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// PUT /instock-update request
///
/// Carries the full editable field set; the id selects the row and is
/// itself never changed by an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdateRequest {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub in_stock_value: u32,
    pub sold_stock_value: u32,
    pub description: String,
}

/// POST /delete-product request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductRequest {
    pub product_key: String,
}

/// POST /create-product request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_data: Product,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_response_requires_exact_marker() {
        let yes = VerifySellerResponse {
            logged_in: "loggedin".to_string(),
        };
        assert!(yes.is_verified());

        let no = VerifySellerResponse {
            logged_in: "loggedout".to_string(),
        };
        assert!(!no.is_verified());

        // absent field reads as empty, which is a denial
        let absent: VerifySellerResponse = serde_json::from_str("{}").unwrap();
        assert!(!absent.is_verified());
    }

    #[test]
    fn test_update_request_uses_camel_case_keys() {
        let request = StockUpdateRequest {
            product_id: "100001".to_string(),
            name: "Tumbler".to_string(),
            category: "Drinkware".to_string(),
            price: 24.0,
            in_stock_value: 10,
            sold_stock_value: 2,
            description: String::new(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["productId"], "100001");
        assert_eq!(json["inStockValue"], 10);
        assert_eq!(json["soldStockValue"], 2);
    }

    #[test]
    fn test_create_request_nests_product_data() {
        let request = CreateProductRequest {
            product_data: Product {
                product_id: "100002".to_string(),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["productData"]["productId"], "100002");
    }
}
