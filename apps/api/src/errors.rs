use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::auth::AuthError;

/// Message shown for any failed analysis, whatever the cause.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Analysis failed: {0}")]
    Analysis(AnalysisError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyInput => AppError::Validation(err.to_string()),
            other => AppError::Analysis(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(e) => {
                tracing::error!("Analysis error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_FAILED",
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Auth(AuthError::MissingCredentials) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                AuthError::MissingCredentials.to_string(),
            ),
            AppError::Auth(e) => {
                tracing::error!("Auth error: {e}");
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

    #[test]
    fn test_empty_input_maps_to_validation() {
        let err: AppError = AnalysisError::EmptyInput.into();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_analysis_failures_map_to_bad_gateway() {
        let err: AppError = AnalysisError::Parse {
            raw: "x".into(),
            reason: "y".into(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_missing_credentials_is_bad_request() {
        let err: AppError = AuthError::MissingCredentials.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
