//! Prompt Routes - Generation, templates and history
//!
//! HTTP handlers that delegate to PromptService. Generate and template
//! failures answer 400 with a `PromptResponse` error body; read endpoints
//! answer 500 with the error text.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use autoprompt::PromptSpec;

use crate::models::{
    GeneratePromptRequest, HistoryQuery, HistoryRecordResponse, PromptResponse, StatsResponse,
    TemplateRequest, TypeQuery,
};
use crate::AppState;

type PromptResult = Result<Json<PromptResponse>, (StatusCode, Json<PromptResponse>)>;
type ReadResult<T> = Result<Json<T>, (StatusCode, String)>;

fn bad_request(prefix: &str, error: impl std::fmt::Display) -> (StatusCode, Json<PromptResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(PromptResponse::error(format!("{}{}", prefix, error))),
    )
}

fn internal_error(error: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}

fn to_responses(records: Vec<autoprompt::HistoryRecord>) -> Vec<HistoryRecordResponse> {
    records.into_iter().map(HistoryRecordResponse::from).collect()
}

/// Generate a test automation prompt with the AI provider
#[utoipa::path(
    post,
    path = "/api/prompts/generate",
    request_body = GeneratePromptRequest,
    responses(
        (status = 200, description = "Generated prompt (AI failures come back as \"Error: ...\" text)", body = PromptResponse),
        (status = 400, description = "Malformed body, missing required fields or storage failure", body = PromptResponse)
    ),
    tag = "Prompt"
)]
pub async fn generate_prompt(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePromptRequest>, JsonRejection>,
) -> PromptResult {
    const PREFIX: &str = "Error generating prompt: ";

    let Json(payload) = payload.map_err(|r| bad_request(PREFIX, r.body_text()))?;
    let spec = PromptSpec::from(payload);
    spec.validate().map_err(|e| bad_request(PREFIX, e))?;

    let outcome = state
        .prompt_service
        .generate(&spec)
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate prompt: {}", e);
            bad_request(PREFIX, e)
        })?;

    Ok(Json(PromptResponse::new(outcome.text, outcome.label)))
}

/// Get a built-in template by name
#[utoipa::path(
    post,
    path = "/api/prompts/template",
    request_body = TemplateRequest,
    responses(
        (status = 200, description = "Template body, or \"Template not found\"", body = PromptResponse),
        (status = 400, description = "Malformed body, blank template type or storage failure", body = PromptResponse)
    ),
    tag = "Prompt"
)]
pub async fn get_template(
    State(state): State<AppState>,
    payload: Result<Json<TemplateRequest>, JsonRejection>,
) -> PromptResult {
    const PREFIX: &str = "Error retrieving template: ";

    let Json(payload) = payload.map_err(|r| bad_request(PREFIX, r.body_text()))?;

    if payload.template_type.trim().is_empty() {
        return Err(bad_request(PREFIX, "templateType is required"));
    }

    let outcome = state
        .prompt_service
        .template(&payload.template_type)
        .await
        .map_err(|e| {
            tracing::error!("Failed to retrieve template: {}", e);
            bad_request(PREFIX, e)
        })?;

    Ok(Json(PromptResponse::new(outcome.text, outcome.label)))
}

/// List built-in template names
#[utoipa::path(
    get,
    path = "/api/prompts/templates",
    responses(
        (status = 200, description = "Template names", body = Vec<String>)
    ),
    tag = "Prompt"
)]
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.prompt_service.available_templates())
}

/// History for the last N days, newest first
#[utoipa::path(
    get,
    path = "/api/prompts/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "History records", body = Vec<HistoryRecordResponse>),
        (status = 400, description = "Invalid days"),
        (status = 500, description = "Internal server error")
    ),
    tag = "History"
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> ReadResult<Vec<HistoryRecordResponse>> {
    let records = state
        .prompt_service
        .recent_history(query.days)
        .await
        .map_err(internal_error)?;

    Ok(Json(to_responses(records)))
}

/// History for one template type label
#[utoipa::path(
    get,
    path = "/api/prompts/history/template/{template_type}",
    params(
        ("template_type" = String, Path, description = "Template type label, e.g. \"custom\" or \"api\"")
    ),
    responses(
        (status = 200, description = "History records", body = Vec<HistoryRecordResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "History"
)]
pub async fn get_history_by_template(
    State(state): State<AppState>,
    Path(template_type): Path<String>,
) -> ReadResult<Vec<HistoryRecordResponse>> {
    let records = state
        .prompt_service
        .history_by_template(&template_type)
        .await
        .map_err(internal_error)?;

    Ok(Json(to_responses(records)))
}

/// History for an app type / test type pair
#[utoipa::path(
    get,
    path = "/api/prompts/history/type",
    params(TypeQuery),
    responses(
        (status = 200, description = "History records", body = Vec<HistoryRecordResponse>),
        (status = 400, description = "Missing appType or testType"),
        (status = 500, description = "Internal server error")
    ),
    tag = "History"
)]
pub async fn get_history_by_type(
    State(state): State<AppState>,
    Query(query): Query<TypeQuery>,
) -> ReadResult<Vec<HistoryRecordResponse>> {
    let records = state
        .prompt_service
        .history_by_app_and_test_type(&query.app_type, &query.test_type)
        .await
        .map_err(internal_error)?;

    Ok(Json(to_responses(records)))
}

/// Usage statistics for the last N days
#[utoipa::path(
    get,
    path = "/api/prompts/stats",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Usage statistics", body = StatsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "History"
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> ReadResult<StatsResponse> {
    let stats = state
        .prompt_service
        .stats(query.days)
        .await
        .map_err(internal_error)?;

    Ok(Json(StatsResponse::from(stats)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prompts/generate", post(generate_prompt))
        .route("/api/prompts/template", post(get_template))
        .route("/api/prompts/templates", get(list_templates))
        .route("/api/prompts/history", get(get_history))
        .route(
            "/api/prompts/history/template/:template_type",
            get(get_history_by_template),
        )
        .route("/api/prompts/history/type", get(get_history_by_type))
        .route("/api/prompts/stats", get(get_stats))
}
