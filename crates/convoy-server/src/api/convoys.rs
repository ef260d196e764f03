//! Convoy API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use convoy_core::models::{Convoy, ConvoyRequest, ConvoyUpdate};

use crate::api::error::ApiError;
use crate::convoy_planner::plan_convoy;
use crate::state::AppState;

/// Plan a threat-aware route and start a new convoy on it.
pub async fn create_convoy(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConvoyRequest>,
) -> Json<ConvoyUpdate> {
    Json(plan_convoy(&state, &req))
}

/// List all convoys.
pub async fn list_convoys(State(state): State<Arc<AppState>>) -> Json<Vec<Convoy>> {
    Json(state.get_convoys())
}

/// Get a specific convoy by ID.
pub async fn get_convoy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Convoy>, ApiError> {
    state
        .get_convoy(id)
        .map(Json)
        .ok_or(ApiError::ConvoyNotFound(id))
}
