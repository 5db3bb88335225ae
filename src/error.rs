use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::utils::validate::ValidationError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    DuplicateName(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InUse(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Internal(String),
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "error": err.to_string(), "fields": err.fields() }),
            ),
            AppError::DuplicateName(msg) | AppError::InUse(msg) => {
                (StatusCode::CONFLICT, serde_json::json!({ "error": msg }))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, serde_json::json!({ "error": msg }))
            }
            AppError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, serde_json::json!({ "error": msg }))
            }
            AppError::Internal(_) | AppError::Database(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
