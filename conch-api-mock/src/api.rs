//! HTTP handlers for the mock catalog service
//!
//! Mirrors the deployed catalog API closely enough for the console and
//! client integration tests: same routes, same envelope quirks. Notably
//! the delete endpoint reports rejection inside an ok response instead of
//! an HTTP error status.

use crate::state::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use shared::CatalogResponse;
use shared::catalog::{
    CreateProductRequest, DeleteProductRequest, LogoutRequest, ProductListResponse,
    StockUpdateRequest, VerifySellerRequest, VerifySellerResponse,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// POST /admin/verify-seller - 校验卖家会话
async fn verify_seller(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifySellerRequest>,
) -> Json<VerifySellerResponse> {
    let logged_in = if state.sellers.read().await.contains(&req.seller_id) {
        VerifySellerResponse::LOGGED_IN.to_string()
    } else {
        tracing::warn!(seller_id = %req.seller_id, "verify rejected: no active session");
        "loggedout".to_string()
    };

    Json(VerifySellerResponse { logged_in })
}

/// GET /get-product - 返回全量商品列表
async fn get_products(State(state): State<Arc<AppState>>) -> Json<ProductListResponse> {
    let products = state.products.read().await.clone();
    Json(ProductListResponse { products })
}

/// PUT /instock-update - 更新商品的可编辑字段
///
/// 商品 id 只用于定位行，本身不会被修改。
async fn update_stock(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StockUpdateRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut products = state.products.write().await;

    match products.iter_mut().find(|p| p.product_id == req.product_id) {
        Some(product) => {
            product.name = req.name.clone();
            product.category = req.category.clone();
            product.price = req.price;
            product.in_stock_value = req.in_stock_value;
            product.sold_stock_value = req.sold_stock_value;
            product.description = req.description.clone();

            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "message": "Stock updated successfully"
                })),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "success": false,
                "error": "Product not found"
            })),
        ),
    }
}

/// POST /delete-product - 删除商品
///
/// 拒绝通过响应信封报告 (`success: false`)，HTTP 状态始终为 200。
async fn delete_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteProductRequest>,
) -> Json<CatalogResponse<serde_json::Value>> {
    let mut products = state.products.write().await;
    let before = products.len();
    products.retain(|p| p.product_id != req.product_key);

    if products.len() < before {
        tracing::info!(product_key = %req.product_key, "product deleted");
        Json(CatalogResponse::success(serde_json::json!({
            "productKey": req.product_key
        })))
    } else {
        Json(CatalogResponse::error("Product not found"))
    }
}

/// POST /create-product - 新增商品
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Json<serde_json::Value> {
    let mut products = state.products.write().await;
    products.push(req.product_data);

    tracing::info!(count = products.len(), "product created");

    Json(serde_json::json!({
        "success": true,
        "message": "Product saved successfully"
    }))
}

/// POST /admin/logout - 注销卖家会话
async fn logout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LogoutRequest>,
) -> Json<serde_json::Value> {
    state.sellers.write().await.remove(&req.seller_id);
    tracing::info!(seller_id = %req.seller_id, "seller logged out");

    Json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully"
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin/verify-seller", post(verify_seller))
        .route("/get-product", get(get_products))
        .route("/instock-update", put(update_stock))
        .route("/delete-product", post(delete_product))
        .route("/create-product", post(create_product))
        .route("/admin/logout", post(logout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
