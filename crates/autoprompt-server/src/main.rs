use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{GeminiClient, PgHistoryRepository};
use application::PromptService;
use autoprompt::{CompletionClient, HistoryRepository, TemplateCatalog};
use config::ServerConfig;

/// Application service over trait objects so adapters can be swapped at startup
pub type AppPromptService = PromptService<dyn HistoryRepository, dyn CompletionClient>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "AutoPrompt API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::prompt::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🧪 AutoPrompt API initializing...");

    let config = ServerConfig::from_secrets(&secrets);

    // Initialize API key from secrets
    if let Some(api_key) = config.api_key.clone() {
        auth::init_api_key(api_key);
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No AUTOPROMPT_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    let gemini = GeminiClient::new(
        config.gemini_api_url.clone(),
        config.gemini_api_key.clone(),
        config.gemini_timeout,
    )
    .context("Failed to build Gemini HTTP client")?;

    tracing::info!(
        "🤖 Gemini client initialized ({}, timeout: {:?})",
        config.gemini_api_url,
        config.gemini_timeout
    );

    // Initialize application service
    let history_repo: Arc<dyn HistoryRepository> = Arc::new(PgHistoryRepository::new(pool));
    let completion: Arc<dyn CompletionClient> = Arc::new(gemini);
    let templates = Arc::new(TemplateCatalog::builtin());

    tracing::info!("📋 {} built-in templates loaded", templates.len());

    let state = AppState {
        prompt_service: Arc::new(PromptService::new(history_repo, completion, templates)),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ AutoPrompt API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use autoprompt::AiResult;
    use test_support::{InMemoryHistoryRepository, ScriptedCompletionClient};

    fn test_router() -> Router {
        let repo: Arc<dyn HistoryRepository> = Arc::new(InMemoryHistoryRepository::new());
        let ai: Arc<dyn CompletionClient> =
            Arc::new(ScriptedCompletionClient::new(AiResult::Generated("ok".into())));
        build_router(AppState {
            prompt_service: Arc::new(PromptService::new(
                repo,
                ai,
                Arc::new(TemplateCatalog::builtin()),
            )),
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_prompt_routes_mounted() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/prompts/templates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
