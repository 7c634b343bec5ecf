use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use wealthdeck_core::assets::{AssetCategory, AssetItem, CategoryDetail, NewAssetItem};

async fn list_asset_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<AssetItem>>> {
    let items = state.dashboard().asset_items().to_vec();
    Ok(Json(items))
}

async fn create_asset_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAssetItem>,
) -> ApiResult<(StatusCode, Json<AssetItem>)> {
    let item = state.dashboard_mut().create_asset_item(payload)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_category_detail(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CategoryDetail>> {
    let category = key
        .parse::<AssetCategory>()
        .map_err(|e| ApiError::NotFound(e.to_string()))?;
    let detail = state.dashboard().category_detail(category);
    Ok(Json(detail))
}

async fn list_payment_sources(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AssetItem>>> {
    let sources = state.dashboard().payment_sources();
    Ok(Json(sources))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_asset_items).post(create_asset_item))
        .route("/assets/categories/{key}", get(get_category_detail))
        .route("/assets/payment-sources", get(list_payment_sources))
}
