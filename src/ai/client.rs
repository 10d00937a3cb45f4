use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::OptimizeError;

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The upstream generation call: one system instruction, one user message,
/// an optional strict-mode response schema, raw text back.
///
/// `Optimizer` is generic over this seam, so tests inject doubles and no
/// module-level client singleton exists.
#[async_trait]
pub trait TextGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        user_message: &str,
        response_schema: Option<Value>,
    ) -> Result<String, OptimizeError>;
}

/// Explicit client configuration, passed into the constructor.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: GEMINI_MODEL.to_string(),
        }
    }

    /// Reads `GEMINI_API_KEY` (required) and `GEMINI_MODEL` (optional).
    pub fn from_env() -> Result<Self, OptimizeError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| OptimizeError::Upstream("GEMINI_API_KEY is not set".into()))?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| GEMINI_MODEL.to_string());
        Ok(Self { api_key, model })
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            config,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        user_message: &str,
        response_schema: Option<Value>,
    ) -> Result<String, OptimizeError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_ENDPOINT, self.config.model, self.config.api_key
        );

        let mut payload = json!({
            "system_instruction": {
                "parts": [{ "text": system_instruction }]
            },
            "contents": [{
                "parts": [{ "text": user_message }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        });

        if let Some(schema) = response_schema {
            payload["generationConfig"]["responseSchema"] = schema;
        }

        let res = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| OptimizeError::Upstream(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("Gemini API error {status}: {err_text}");
            return Err(OptimizeError::Upstream(format!(
                "API error {status}: {err_text}"
            )));
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| OptimizeError::Upstream(e.to_string()))?;

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| OptimizeError::Upstream("No text content returned".into()))?;

        Ok(text.to_string())
    }
}
