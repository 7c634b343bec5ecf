use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::FxRates};
use axum::{extract::State, routing::get, Json, Router};

async fn get_exchange_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<FxRates>> {
    let dashboard = state.dashboard();
    let rates = dashboard.rates();
    Ok(Json(FxRates {
        base_currency: rates.base_currency().to_string(),
        rates: rates.exchange_rates(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/fx/rates", get(get_exchange_rates))
}
