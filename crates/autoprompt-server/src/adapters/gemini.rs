//! Gemini Completion Client
//!
//! Implements the CompletionClient port against Gemini's `generateContent`
//! endpoint using reqwest. Every failure is folded into `AiResult::Failed`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use autoprompt::{AiResult, CompletionClient, GenerationConfig};

pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

const UNEXPECTED_FORMAT: &str = "Unexpected response format";

/// reqwest implementation of CompletionClient
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_url: String,
    api_key: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    /// Create a client for `api_url`; the key is sent as the `key` query parameter.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: api_url.into(),
            api_key: api_key.into(),
            generation_config: GenerationConfig::default(),
        })
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> AiResult {
        tracing::debug!("Preparing Gemini request with prompt: {}", prompt);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            safety_settings: Vec::new(),
            generation_config: self.generation_config,
        };

        tracing::info!("Sending request to Gemini API");

        let response = match self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                // Drop the URL so the API key never reaches logs or history
                let err = err.without_url();
                tracing::error!("Error calling Gemini API: {}", err);
                return AiResult::failed(err.to_string());
            }
        };

        let status = response.status();
        tracing::debug!("Received response from Gemini API: {}", status);

        if !status.is_success() {
            tracing::error!("Non-OK response from Gemini API: {}", status);
            return AiResult::failed(format!("API returned status {}", status));
        }

        let payload: Value = match response.json().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!("Failed to parse Gemini response body: {}", err.without_url());
                return AiResult::failed(UNEXPECTED_FORMAT);
            }
        };

        match extract_text(&payload) {
            Some(text) => {
                tracing::info!("Successfully generated AI response");
                AiResult::Generated(text)
            }
            None => {
                tracing::error!("Unexpected response format from Gemini API: {}", payload);
                AiResult::failed(UNEXPECTED_FORMAT)
            }
        }
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    safety_settings: Vec<Value>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// ============================================
// Helper Functions
// ============================================

/// Text of the first candidate's first content part
fn extract_text(root: &Value) -> Option<String> {
    root.get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
        .map(|text| text.to_string())
}
