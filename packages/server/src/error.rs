use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::storage::StoreError;

/// Message returned when a write carries a payload that is not valid JSON.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid JSON payload";

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `INVALID_PAYLOAD`, `NOT_FOUND`, `INTERNAL_ERROR`.
    #[schema(example = "INVALID_PAYLOAD")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Invalid JSON payload")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request envelope or path parameter.
    Validation(String),
    /// The `payload` string is not syntactically valid JSON.
    InvalidPayload,
    NotFound(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "INVALID_PAYLOAD",
                    message: INVALID_PAYLOAD_MESSAGE.into(),
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound("Content item not found".into()),
            StoreError::Conflict(_) => AppError::Internal(err.to_string()),
            StoreError::Database(e) => e.into(),
        }
    }
}
