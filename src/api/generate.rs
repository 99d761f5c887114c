//! Article generation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::DEFAULT_STYLE;
use crate::error::Result;
use crate::server::AppState;

pub const DEFAULT_TOPIC: &str = "Inteligência Artificial";
pub const DEFAULT_LENGTH: i64 = 500;

/// Request body for `POST /api/generate`. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Target length in characters; zero or negative yields only the ellipsis
    #[serde(default = "default_length")]
    pub length: i64,
    #[serde(default = "default_style")]
    pub style: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

fn default_length() -> i64 {
    DEFAULT_LENGTH
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            length: default_length(),
            style: default_style(),
        }
    }
}

pub async fn generate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    let Json(request) = payload?;

    if !state.generator.catalog().contains(&request.style) {
        tracing::debug!(style = %request.style, "Unknown style, using default");
    }

    let content = state.generator.generate_article(
        &mut rand::rng(),
        &request.topic,
        request.length,
        &request.style,
    )?;

    tracing::info!(
        topic = %request.topic,
        style = %request.style,
        length = request.length,
        "Content generated"
    );

    Ok(Json(GenerateResponse { content }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::ELLIPSIS;
    use crate::error::AppError;

    #[test]
    fn test_request_defaults() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.topic, "Inteligência Artificial");
        assert_eq!(request.length, 500);
        assert_eq!(request.style, "technical");
    }

    #[test]
    fn test_request_partial_fields() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"style": "marketing", "length": 42}"#).unwrap();
        assert_eq!(request.topic, DEFAULT_TOPIC);
        assert_eq!(request.length, 42);
        assert_eq!(request.style, "marketing");
    }

    #[tokio::test]
    async fn test_generate_handler() {
        let state = AppState::new(Settings::default());
        let payload = Ok(Json(GenerateRequest {
            topic: "Rust".to_string(),
            length: 120,
            ..GenerateRequest::default()
        }));

        let Json(response) = generate(State(state), payload).await.unwrap();
        assert_eq!(response.content.chars().count(), 120 + ELLIPSIS.len());
        assert!(response.content.contains("Rust"));
    }

    #[tokio::test]
    async fn test_generate_handler_unallocatable_length() {
        let state = AppState::new(Settings::default());
        let payload = Ok(Json(GenerateRequest {
            length: i64::MAX,
            ..GenerateRequest::default()
        }));

        let result = generate(State(state), payload).await;
        assert!(matches!(result, Err(AppError::Generation(_))));
    }
}
