// src/state.rs
use std::sync::Arc;

use crate::config::GeminiSettings;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            gemini: GeminiClient::new(settings),
        }
    }
}
