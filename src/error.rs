// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::gemini::GeminiError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("upstream generation failed: {0}")]
    Upstream(#[from] GeminiError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => {
                // Upstream details go to the log, not to the caller.
                tracing::error!(error = %err, "generative service call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to generate a response".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
