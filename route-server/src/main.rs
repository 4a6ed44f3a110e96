use std::net::SocketAddr;

use route_server::domain::Network;
use route_server::loader::load_network;
use route_server::palette::standard_palette;
use route_server::planner::SearchConfig;
use route_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Listen address from environment
    let default_addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let addr = match std::env::var("ROUTE_SERVER_ADDR") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(%raw, error = %e, "Invalid ROUTE_SERVER_ADDR, using default");
            default_addr
        }),
        Err(_) => default_addr,
    };

    // Default network (fail fast if configured but unreadable)
    let network = match std::env::var("NETWORK_FILE") {
        Ok(path) => load_network(&path).expect("Failed to load network file"),
        Err(_) => {
            info!("NETWORK_FILE not set; requests must supply a network");
            Network::default()
        }
    };

    let state = AppState::new(SearchConfig::default(), standard_palette(), network);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    info!("Route server listening on http://{addr}");
    info!("  GET  /health          - Health check");
    info!("  POST /routes          - Find ranked routes between two stations");
    info!("  POST /network/summary - Summarise a network");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
