use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use wealthdeck_ai::AiError;
use wealthdeck_core::errors::Error as CoreError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            ApiError::Core(
                CoreError::InvalidExchangeRate(_) | CoreError::InvalidConfigValue(_),
            ) => (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_CONFIG"),
            ApiError::Ai(err) if err.is_invalid_input() => (StatusCode::BAD_REQUEST, err.code()),
            ApiError::Ai(err @ AiError::MissingApiKey(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, err.code())
            }
            ApiError::Ai(err) => (StatusCode::BAD_GATEWAY, err.code()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(code, "{}", self);
        } else {
            tracing::debug!(code, "{}", self);
        }
        let body = ErrorBody {
            code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
