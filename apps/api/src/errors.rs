use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::dsl::migration::MigrationError;
use crate::dsl::validation::ValidationIssue;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid resume DSL ({} issue(s))", .0.len())]
    InvalidDsl(Vec<ValidationIssue>),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),

    #[error("Forbidden")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details: Option<Value> = None;
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidDsl(issues) => {
                details = Some(json!(issues));
                (StatusCode::BAD_REQUEST, "INVALID_DSL", self.to_string())
            }
            AppError::Migration(e) => {
                tracing::warn!("Migration error: {e}");
                (StatusCode::BAD_REQUEST, "MIGRATION_ERROR", e.to_string())
            }
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".to_string()), StatusCode::BAD_REQUEST),
            (AppError::InvalidDsl(vec![]), StatusCode::BAD_REQUEST),
            (
                AppError::Migration(MigrationError::CircularMigration {
                    version: "1.0.0".to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::Forbidden, StatusCode::FORBIDDEN),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_invalid_dsl_message_counts_issues() {
        let err = AppError::InvalidDsl(vec![
            ValidationIssue {
                path: "/version".to_string(),
                message: "version is required".to_string(),
            },
            ValidationIssue {
                path: "/sections".to_string(),
                message: "sections is required".to_string(),
            },
        ]);
        assert_eq!(err.to_string(), "Invalid resume DSL (2 issue(s))");
    }
}
