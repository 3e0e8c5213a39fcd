//! Prompt generation and template DTOs

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use autoprompt::PromptSpec;

/// Label carried by error responses
pub const ERROR_TEMPLATE_TYPE: &str = "error";

/// Generate prompt request
///
/// Required fields default to empty so that missing values reach validation
/// and come back in the error body instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptRequest {
    #[serde(default)]
    pub app_type: String,
    #[serde(default)]
    pub test_type: String,
    #[serde(default)]
    pub framework: String,
    #[serde(default)]
    pub feature_name: String,
    #[serde(default)]
    pub programming_language: String,
    pub feature_description: Option<String>,
    pub user_story: Option<String>,
    pub scenarios: Option<String>,
    pub test_data: Option<String>,
    pub environment: Option<String>,
    pub constraints: Option<String>,
    pub additional_notes: Option<String>,
    pub requirements: Option<Vec<String>>,
}

impl From<GeneratePromptRequest> for PromptSpec {
    fn from(request: GeneratePromptRequest) -> Self {
        PromptSpec {
            app_type: request.app_type,
            test_type: request.test_type,
            framework: request.framework,
            feature_name: request.feature_name,
            programming_language: request.programming_language,
            feature_description: request.feature_description,
            user_story: request.user_story,
            scenarios: request.scenarios,
            test_data: request.test_data,
            environment: request.environment,
            constraints: request.constraints,
            additional_notes: request.additional_notes,
            requirements: request.requirements,
        }
    }
}

/// Template request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    #[serde(default)]
    pub template_type: String,
}

/// Response for generate and template requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub generated_prompt: String,
    pub template_type: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl PromptResponse {
    pub fn new(generated_prompt: impl Into<String>, template_type: impl Into<String>) -> Self {
        Self {
            generated_prompt: generated_prompt.into(),
            template_type: template_type.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Error body: message in `generatedPrompt`, label `"error"`
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ERROR_TEMPLATE_TYPE)
    }
}
