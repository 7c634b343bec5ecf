use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{Profile, ProfileUpdate},
};
use axum::{extract::State, routing::get, Json, Router};
use wealthdeck_core::app_state::DashboardSnapshot;

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardSnapshot>> {
    let snapshot = state.dashboard().dashboard();
    Ok(Json(snapshot))
}

async fn get_profile(State(state): State<Arc<AppState>>) -> ApiResult<Json<Profile>> {
    let dashboard = state.dashboard();
    Ok(Json(Profile {
        username: dashboard.username().to_string(),
        avatar_url: dashboard.user_avatar().to_string(),
    }))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProfileUpdate>,
) -> ApiResult<Json<Profile>> {
    let username = payload.username.map(|name| name.trim().to_string());
    if username.as_deref() == Some("") {
        return Err(ApiError::BadRequest("Username must not be empty".to_string()));
    }

    let mut dashboard = state.dashboard_mut();
    if let Some(username) = username {
        dashboard.set_username(username);
    }
    if let Some(avatar_url) = payload.avatar_url {
        dashboard.set_user_avatar(avatar_url.trim());
    }
    Ok(Json(Profile {
        username: dashboard.username().to_string(),
        avatar_url: dashboard.user_avatar().to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/profile", get(get_profile).put(update_profile))
}
