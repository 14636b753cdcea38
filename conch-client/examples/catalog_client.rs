// conch-client/examples/catalog_client.rs
// 目录客户端示例：校验卖家会话并拉取商品列表

use conch_client::ClientConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let seller_id = std::env::var("CONCH_SELLER_ID").unwrap_or_else(|_| "seller-001".to_string());

    let config = ClientConfig::from_env();
    tracing::info!("Connecting to {}", config.base_url);

    let client = config.build_client();

    // 先验证会话，再拉取目录
    match client.verify_seller(&seller_id).await {
        Ok(true) => tracing::info!("Seller {} verified", seller_id),
        Ok(false) => {
            tracing::error!("Seller {} is not logged in", seller_id);
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Verification failed: {}", e);
            return Err(e.into());
        }
    }

    let products = client.fetch_products().await?;
    tracing::info!("Fetched {} products", products.len());

    for product in &products {
        println!(
            "{:>8}  {:<24} {:<12} {:>8.2}  in:{:>4}  sold:{:>4}",
            product.product_id,
            product.name,
            product.category,
            product.price,
            product.in_stock_value,
            product.sold_stock_value
        );
    }

    Ok(())
}
