//! API routes for the convoy server.

pub mod convoys;
pub mod detect;
pub mod error;
pub mod messages;
mod routes;
pub mod threats;

use crate::config::Config;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}

/// CORS policy allowing the configured dashboard origins.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests;
