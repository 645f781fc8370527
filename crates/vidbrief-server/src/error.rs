use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use vidbrief_core::PipelineError;

/// External error contract: a flat `{"error": message}` payload with only a
/// 400/500 split. Internal stage distinctions stay internal.
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
}

impl From<PipelineError> for HttpError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::InvalidInput(message) => HttpError::BadRequest(message),
            other => HttpError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            HttpError::Internal(message) => {
                tracing::error!(error = %message, "pipeline failure");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
