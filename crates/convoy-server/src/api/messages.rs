//! Team chat endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;

use convoy_core::models::{ChatMessage, DashboardEvent, MessageNotice};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub sid: String,
    pub text: String,
}

pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<Vec<ChatMessage>> {
    Json(state.message_history())
}

pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PostMessageRequest>,
) -> (StatusCode, Json<ChatMessage>) {
    let message = state.add_message(&req.sid, &req.text);
    state.publish(DashboardEvent::Message(MessageNotice {
        sid: message.sid.clone(),
        text: message.text.clone(),
    }));
    (StatusCode::CREATED, Json(message))
}
