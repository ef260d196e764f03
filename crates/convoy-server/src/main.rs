//! Convoy Server - Always-on backend for the convoy coordination dashboard

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use convoy_server::api;
use convoy_server::config::Config;
use convoy_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("convoy_server=debug".parse()?))
        .init();

    tracing::info!("Starting Convoy Server...");

    let config = Config::from_env();
    let port = config.server_port;
    let cors = api::cors_layer(&config);
    let state = Arc::new(AppState::new(config));

    // Build the app
    let app = api::routes()
        .with_state(state) // Inject state into all routes
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
