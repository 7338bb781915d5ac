use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editor::store::StoreError;
use crate::export::ExportError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The user asked for something the resume rules forbid; state unchanged.
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Retryable export failure.
    #[error("Export failed: {0}")]
    Export(String),

    /// A caller broke an API contract (e.g. stale index). A defect, not user error.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotEditing => AppError::Conflict(err.to_string()),
            StoreError::CannotRemoveLast(_) | StoreError::InvalidValue { .. } => {
                AppError::Rejected(err.to_string())
            }
            StoreError::IndexOutOfRange { .. } => AppError::ContractViolation(err.to_string()),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::InProgress => AppError::Conflict(err.to_string()),
            other => AppError::Export(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Rejected(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "REJECTED", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXPORT_FAILED",
                    "Failed to export PDF. Please try again.".to_string(),
                )
            }
            AppError::ContractViolation(msg) => {
                tracing::error!("Contract violation: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTRACT_VIOLATION",
                    msg.clone(),
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

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::store::Section;

    #[test]
    fn test_store_errors_map_to_user_facing_kinds() {
        assert!(matches!(
            AppError::from(StoreError::CannotRemoveLast(Section::Experience)),
            AppError::Rejected(msg) if msg.contains("at least one experience")
        ));
        assert!(matches!(
            AppError::from(StoreError::NotEditing),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(StoreError::IndexOutOfRange {
                section: Section::Projects,
                index: 3,
                len: 1
            }),
            AppError::ContractViolation(_)
        ));
    }

    #[test]
    fn test_export_errors_map() {
        assert!(matches!(
            AppError::from(ExportError::InProgress),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(ExportError::Io(std::io::Error::other("disk full"))),
            AppError::Export(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Rejected("x".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Export("x".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
