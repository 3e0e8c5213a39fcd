//! AutoPrompt API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// API Client for AutoPrompt
pub struct AutoPromptClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptRequest {
    pub app_type: String,
    pub test_type: String,
    pub framework: String,
    pub feature_name: String,
    pub programming_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_story: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateRequest<'a> {
    template_type: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub generated_prompt: String,
    pub template_type: String,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: i64,
    pub app_type: String,
    pub test_type: String,
    pub framework: String,
    pub feature_name: String,
    pub programming_language: String,
    pub generated_prompt: Option<String>,
    pub template_type: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_prompts: i64,
    pub recent_prompts: usize,
    pub period: String,
}

impl AutoPromptClient {
    /// Create a new API client; an empty key sends no Authorization header
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()).map(|k| k.to_string()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        self.authorized(request)
            .send()
            .await
            .context("Failed to connect to AutoPrompt API")
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// Generate a prompt with the AI provider.
    ///
    /// 400 answers carry a `PromptResponse` error body, surfaced as the error.
    pub async fn generate(&self, request: &GeneratePromptRequest) -> Result<PromptResponse> {
        let resp = self
            .send(self.client.post(self.url("/api/prompts/generate")).json(request))
            .await?;
        Self::parse_prompt(resp).await
    }

    /// Fetch a built-in template
    pub async fn template(&self, name: &str) -> Result<PromptResponse> {
        let resp = self
            .send(
                self.client
                    .post(self.url("/api/prompts/template"))
                    .json(&TemplateRequest {
                        template_type: name,
                    }),
            )
            .await?;
        Self::parse_prompt(resp).await
    }

    /// List built-in template names
    pub async fn templates(&self) -> Result<Vec<String>> {
        let resp = self
            .send(self.client.get(self.url("/api/prompts/templates")))
            .await?;
        Self::parse(resp).await
    }

    /// History for the last `days` days
    pub async fn history(&self, days: u32) -> Result<Vec<HistoryRecord>> {
        let resp = self
            .send(
                self.client
                    .get(self.url("/api/prompts/history"))
                    .query(&[("days", days)]),
            )
            .await?;
        Self::parse(resp).await
    }

    /// History for one template type label
    pub async fn history_by_template(&self, template_type: &str) -> Result<Vec<HistoryRecord>> {
        let path = format!(
            "/api/prompts/history/template/{}",
            urlencoding::encode(template_type)
        );
        let resp = self.send(self.client.get(self.url(&path))).await?;
        Self::parse(resp).await
    }

    /// History for an app type / test type pair
    pub async fn history_by_type(
        &self,
        app_type: &str,
        test_type: &str,
    ) -> Result<Vec<HistoryRecord>> {
        let resp = self
            .send(
                self.client
                    .get(self.url("/api/prompts/history/type"))
                    .query(&[("appType", app_type), ("testType", test_type)]),
            )
            .await?;
        Self::parse(resp).await
    }

    /// Usage statistics for the last `days` days
    pub async fn stats(&self, days: u32) -> Result<StatsResponse> {
        let resp = self
            .send(
                self.client
                    .get(self.url("/api/prompts/stats"))
                    .query(&[("days", days)]),
            )
            .await?;
        Self::parse(resp).await
    }

    async fn parse_prompt(resp: Response) -> Result<PromptResponse> {
        if resp.status() == reqwest::StatusCode::BAD_REQUEST {
            let body = resp.text().await.unwrap_or_default();
            match serde_json::from_str::<PromptResponse>(&body) {
                Ok(error) => bail!("{}", error.generated_prompt),
                Err(_) => bail!("API error (400 Bad Request): {}", body),
            }
        }
        Self::parse(resp).await
    }
}
