use anyhow::Result;
use docvault::DocumentStore;
use docvault_server::routes;
use docvault_server::state::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 7133;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = DocumentStore::open_default().await?;
    let state = Arc::new(AppState::new(store));

    // The frontend is served from a local origin of its own.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state).layer(cors);

    let port = std::env::var("DOCVAULT_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("docvaultd listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
