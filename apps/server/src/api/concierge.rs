use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use wealthdeck_ai::{ConciergeMessage, ConciergeReply, ConciergeRequest};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConciergeSession {
    greeting: String,
    history: Vec<ConciergeMessage>,
}

/// Opening message and history for a new conversation.
async fn start_conversation(State(state): State<Arc<AppState>>) -> Json<ConciergeSession> {
    let service = &state.concierge_service;
    Json(ConciergeSession {
        greeting: service.greeting().to_string(),
        history: service.initial_history(),
    })
}

/// Sends one message. Never touches dashboard state.
async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConciergeRequest>,
) -> ApiResult<Json<ConciergeReply>> {
    let reply = state.concierge_service.send_message(request).await?;
    Ok(Json(reply))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/concierge/session", get(start_conversation))
        .route("/concierge/messages", post(send_message))
}
