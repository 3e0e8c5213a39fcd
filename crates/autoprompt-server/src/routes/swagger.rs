//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    GeneratePromptRequest, HistoryRecordResponse, PromptResponse, StatsResponse, TemplateRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prompt endpoints
        super::prompt::generate_prompt,
        super::prompt::get_template,
        super::prompt::list_templates,
        // History endpoints
        super::prompt::get_history,
        super::prompt::get_history_by_template,
        super::prompt::get_history_by_type,
        super::prompt::get_stats,
    ),
    info(
        title = "AutoPrompt API",
        version = "0.1.0",
        description = "Test automation prompt generation with AI assistance, built-in templates and request history.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Prompt", description = "Prompt - AI generation and built-in templates"),
        (name = "History", description = "History - Stored prompts and usage statistics"),
    ),
    components(
        schemas(
            // Prompt
            GeneratePromptRequest,
            TemplateRequest,
            PromptResponse,
            // History
            HistoryRecordResponse,
            StatsResponse,
        )
    ),
)]
pub struct ApiDoc;
