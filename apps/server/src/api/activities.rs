use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ActivityCreated, ExpenseCategoryList, NewExpenseCategory},
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use wealthdeck_core::activities::{Activity, NewActivity};

async fn list_activities(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Activity>>> {
    let activities = state.dashboard().activities().to_vec();
    Ok(Json(activities))
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewActivity>,
) -> ApiResult<(StatusCode, Json<ActivityCreated>)> {
    if payload.amount.trim().is_empty() {
        return Err(ApiError::BadRequest("Amount is required".to_string()));
    }
    if payload.category.trim().is_empty() {
        return Err(ApiError::BadRequest("Category is required".to_string()));
    }
    let (activity, deduction) = state.dashboard_mut().create_activity(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ActivityCreated {
            activity,
            deduction,
        }),
    ))
}

async fn list_expense_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<String>>> {
    let categories = state.dashboard().expense_categories().to_vec();
    Ok(Json(categories))
}

async fn add_expense_category(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewExpenseCategory>,
) -> ApiResult<Json<ExpenseCategoryList>> {
    let mut dashboard = state.dashboard_mut();
    let added = dashboard.add_expense_category(&payload.name);
    Ok(Json(ExpenseCategoryList {
        added,
        categories: dashboard.expense_categories().to_vec(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities).post(create_activity))
        .route(
            "/activities/categories",
            get(list_expense_categories).post(add_expense_category),
        )
}
