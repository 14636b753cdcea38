use conch_api_mock::{AppState, router};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("CONCH_MOCK_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001);

    let state = Arc::new(AppState::with_seed());
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Mock catalog service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
