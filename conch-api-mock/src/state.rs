//! In-memory state for the mock catalog service

use shared::Product;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Mock service state: the product table plus the set of active seller
/// sessions. Everything lives in memory and resets on restart.
pub struct AppState {
    /// Product catalog in insertion order
    pub products: RwLock<Vec<Product>>,
    /// Seller ids with an active session
    pub sellers: RwLock<HashSet<String>>,
}

impl AppState {
    /// Create an empty state: no products, no active sellers
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            sellers: RwLock::new(HashSet::new()),
        }
    }

    /// State pre-loaded with a demo seller and a small catalog
    pub fn with_seed() -> Self {
        let products = vec![
            Product {
                product_id: "100001".to_string(),
                name: "Canvas Tote Bag".to_string(),
                category: "Bags".to_string(),
                description: "Cotton canvas tote with inner pocket".to_string(),
                price: 19.5,
                in_stock_value: 40,
                sold_stock_value: 12,
                rating: 4.2,
                ..Default::default()
            },
            Product {
                product_id: "100002".to_string(),
                name: "Wool Beanie".to_string(),
                category: "Hats".to_string(),
                description: "Ribbed knit beanie, one size".to_string(),
                price: 12.0,
                in_stock_value: 25,
                sold_stock_value: 3,
                rating: 4.8,
                ..Default::default()
            },
            Product {
                product_id: "100003".to_string(),
                name: "Steel Tumbler".to_string(),
                category: "Drinkware".to_string(),
                description: "Insulated 500ml tumbler".to_string(),
                price: 24.0,
                in_stock_value: 10,
                sold_stock_value: 8,
                rating: 3.9,
                ..Default::default()
            },
        ];

        let mut sellers = HashSet::new();
        sellers.insert("seller-001".to_string());

        Self {
            products: RwLock::new(products),
            sellers: RwLock::new(sellers),
        }
    }

    /// Register an active seller session
    pub async fn add_seller(&self, seller_id: impl Into<String>) {
        self.sellers.write().await.insert(seller_id.into());
    }

    /// Replace the product table
    pub async fn set_products(&self, products: Vec<Product>) {
        *self.products.write().await = products;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_seed_has_demo_seller() {
        let state = AppState::with_seed();
        assert!(state.sellers.read().await.contains("seller-001"));
        assert_eq!(state.products.read().await.len(), 3);
    }

    #[tokio::test]
    async fn test_set_products_replaces_table() {
        let state = AppState::with_seed();
        state
            .set_products(vec![Product {
                product_id: "200000".to_string(),
                ..Default::default()
            }])
            .await;

        let products = state.products.read().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_id, "200000");
    }
}
