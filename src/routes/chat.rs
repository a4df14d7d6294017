use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.unwrap_or_default();

    // Rejected before any upstream call is made.
    if message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "You need to input a message".to_string(),
        ));
    }

    // The message goes through verbatim as the whole prompt.
    let response = state.gemini.generate(&message).await?;

    Ok(Json(ChatResponse { response }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "message": "Server is working" }))
}
