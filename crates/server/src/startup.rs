use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig, StorageConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use service::quotes::{PersistPolicy, QuoteStore};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}:{}: {}", server.host, server.port, e)))
}

/// Open the quote store described by `storage` and build the router around it.
pub async fn build_app(storage: &StorageConfig) -> Result<Router, StartupError> {
    let policy = PersistPolicy::from_strict(storage.strict_persistence);
    let quotes = QuoteStore::open_with_policy(&storage.quotes_path, policy).await?;
    info!(path = %quotes.path().display(), policy = ?quotes.policy(), "quote store ready");
    Ok(routes::build_router(AppState::new(quotes), build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg.storage).await?;

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(StartupError::from)?;
    info!(%addr, quotes_path = %cfg.storage.quotes_path, "quote server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
