//! Catalog API response envelope

use serde::{Deserialize, Serialize};

/// Response envelope used by catalog mutation endpoints.
///
/// The deployed service reports application-level rejection with
/// `success: false` inside an ok status, so callers check the flag
/// rather than the status code:
/// ```json
/// {
///     "success": false,
///     "data": null,
///     "error": "Product not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CatalogResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_success_flag_parses() {
        // the deployed delete endpoint answers with just the flag
        let response: CatalogResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.success);
        assert!(response.data.is_none());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_error_response_carries_message() {
        let response = CatalogResponse::<()>::error("Product not found");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Product not found"));
    }
}
