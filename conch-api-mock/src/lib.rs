//! Conch API Mock - in-memory stand-in for the seller catalog service
//!
//! Serves the six catalog endpoints against in-memory state. Used by the
//! integration tests and for local console development without a deployed
//! backend.

pub mod api;
pub mod state;

pub use api::router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

/// Bind an ephemeral local port and serve the mock in a background task.
///
/// Returns the bound address and the serve task handle; tests hold the
/// handle so the server lives for the duration of the test.
pub async fn spawn(
    state: Arc<AppState>,
) -> std::io::Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = api::router(state);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("mock server error: {}", e);
        }
    });

    Ok((addr, handle))
}
