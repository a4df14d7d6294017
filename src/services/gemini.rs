//! Client for Google's Gemini `generateContent` API.
//!
//! One message in, one block of generated text out. No streaming and no
//! conversation context; the caller's message is the entire prompt.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::GeminiSettings;

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("network error calling Gemini: {0}")]
    Network(String),
    #[error("Gemini API error {0}: {1}")]
    Api(StatusCode, String),
    #[error("failed to decode Gemini response: {0}")]
    Decode(String),
    #[error("Gemini response contained no generated text")]
    NoText,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, settings }
    }

    // The key travels in the URL, so the URL must never be logged.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.settings.api_base, self.settings.model, self.settings.api_key
        )
    }

    /// Send `message` as the whole prompt and return the generated text.
    pub async fn generate(&self, message: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.settings.model,
            message_len = message.len(),
            "sending request to Gemini API"
        );

        let response = self
            .http
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api(status, body));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Decode(e.to_string()))?;

        api_response.into_text().ok_or(GeminiError::NoText)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_gemini_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "Hello".to_string(),
                }],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "Hello" }] }
                ]
            })
        );
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "Hi there" }, { "text": "ignored" }]
                    },
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": { "promptTokenCount": 1 }
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("Hi there"));
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(response.into_text().is_none());

        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_text().is_none());
    }
}
