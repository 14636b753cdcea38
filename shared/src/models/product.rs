//! Product Model

use serde::{Deserialize, Serialize};

/// Product listing as stored by the catalog service.
///
/// The wire format uses camelCase keys. Old catalog documents can be
/// sparse, so every field falls back to its default when absent; a
/// missing `name` or `productId` reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Unique id. Client-generated ids are 6-digit numeric strings.
    /// Immutable once created.
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    /// Units currently in stock. Independent of `sold_stock_value`;
    /// sold exceeding stock is representable.
    pub in_stock_value: u32,
    pub sold_stock_value: u32,
    /// Advisory rating in [0, 5]. Bounded at input widgets only.
    pub rating: f64,
    /// One or more data URLs joined with a single space.
    pub img: String,
}
