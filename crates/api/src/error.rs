use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homeprice_core::error::CoreError;
use homeprice_core::validation::ValidationError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `homeprice_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(ValidationError::FieldConstraint(v)) => (
                    StatusCode::BAD_REQUEST,
                    "FIELD_CONSTRAINT_VIOLATION",
                    v.message.clone(),
                    serde_json::to_value(v).ok(),
                ),
                CoreError::Validation(ValidationError::CrossField(v)) => (
                    StatusCode::BAD_REQUEST,
                    "CROSS_FIELD_VIOLATION",
                    v.message.clone(),
                    serde_json::to_value(v).ok(),
                ),
                CoreError::PredictorUnavailable(msg) => {
                    tracing::error!(error = %msg, "Predictor unavailable");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PREDICTOR_UNAVAILABLE",
                        format!("Pipeline error: {msg}"),
                        None,
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}
