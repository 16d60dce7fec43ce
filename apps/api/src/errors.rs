use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::fixtures::validation::RejectedRow;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A fixtures upload failed row validation. Carries the complete ordered
    /// report so the whole file can be corrected in one round; nothing was
    /// written.
    #[error("Fixture import rejected: {} row(s) failed validation", .0.len())]
    ImportRejected(Vec<RejectedRow>),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, error_body("NOT_FOUND", &msg)),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, error_body("VALIDATION_ERROR", &msg))
            }
            AppError::ImportRejected(rows) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": {
                        "code": "IMPORT_REJECTED",
                        "message": format!("{} row(s) failed validation", rows.len()),
                        "rows": rows,
                    }
                }),
            ),
            AppError::Upload(msg) => (StatusCode::BAD_REQUEST, error_body("UPLOAD_ERROR", &msg)),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body("DATABASE_ERROR", "A database error occurred"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body("INTERNAL_ERROR", "An internal server error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

fn error_body(code: &str, message: &str) -> serde_json::Value {
    json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_maps_to_unprocessable_entity() {
        let err = AppError::ImportRejected(vec![RejectedRow {
            row: 3,
            errors: vec!["Invalid day in month: 32".to_string()],
        }]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_storage_failure_is_a_generic_500() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upload_failure_is_distinct_from_rejection() {
        let err = AppError::Upload("No file field in upload".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
