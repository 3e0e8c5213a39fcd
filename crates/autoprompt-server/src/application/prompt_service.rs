//! Prompt Application Service (Use Case)
//!
//! Orchestrates prompt assembly, AI completion, template lookup and
//! history persistence.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use autoprompt::{
    CompletionClient, DomainError, HistoryRecord, HistoryRepository, NewHistoryRecord,
    PromptSpec, TemplateCatalog, CUSTOM_GENERATION_LABEL,
};

/// Text returned when a template name is unknown
pub const TEMPLATE_NOT_FOUND: &str = "Template not found";

/// Result of a generate or template request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    pub text: String,
    pub label: String,
}

/// Aggregate counts for a time window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptStats {
    pub total_prompts: i64,
    pub recent_prompts: usize,
    pub period_days: u32,
}

/// Application service for prompt operations
pub struct PromptService<R, C>
where
    R: HistoryRepository + ?Sized,
    C: CompletionClient + ?Sized,
{
    repo: Arc<R>,
    ai: Arc<C>,
    templates: Arc<TemplateCatalog>,
}

impl<R, C> PromptService<R, C>
where
    R: HistoryRepository + ?Sized,
    C: CompletionClient + ?Sized,
{
    pub fn new(repo: Arc<R>, ai: Arc<C>, templates: Arc<TemplateCatalog>) -> Self {
        Self {
            repo,
            ai,
            templates,
        }
    }

    /// Render the requirements, ask the AI provider, and record the outcome.
    ///
    /// The record is written whether or not the provider succeeded; a failure
    /// is stored and returned as `"Error: ..."` text under the normal label.
    pub async fn generate(&self, spec: &PromptSpec) -> Result<PromptOutcome, DomainError> {
        let prompt = spec.render();
        let result = self.ai.complete(&prompt).await;

        if !result.is_generated() {
            tracing::warn!(
                "AI generation via {} failed for feature {}",
                self.ai.provider_name(),
                spec.feature_name
            );
        }

        let text = result.into_text();
        let saved = self
            .repo
            .save(NewHistoryRecord::generated(spec, text.clone()))
            .await?;

        tracing::info!(
            "Generated prompt for {} ({} / {}) - history {}",
            saved.feature_name,
            saved.app_type,
            saved.test_type,
            saved.id
        );

        Ok(PromptOutcome {
            text,
            label: CUSTOM_GENERATION_LABEL.to_string(),
        })
    }

    /// Serve a built-in template; unknown names are a soft miss with no write.
    pub async fn template(&self, name: &str) -> Result<PromptOutcome, DomainError> {
        let Some(body) = self.templates.lookup(name) else {
            tracing::info!("Template not found: {}", name);
            return Ok(PromptOutcome {
                text: TEMPLATE_NOT_FOUND.to_string(),
                label: name.to_string(),
            });
        };

        let saved = self.repo.save(NewHistoryRecord::template(name, body)).await?;
        tracing::info!("Served template {} - history {}", name, saved.id);

        Ok(PromptOutcome {
            text: body.to_string(),
            label: name.to_string(),
        })
    }

    /// Names of all built-in templates
    pub fn available_templates(&self) -> Vec<String> {
        self.templates
            .names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Records from the last `days` days, newest first
    pub async fn recent_history(&self, days: u32) -> Result<Vec<HistoryRecord>, DomainError> {
        self.repo.find_since(cutoff(days)).await
    }

    /// Number of records from the last `days` days
    pub async fn count(&self, days: u32) -> Result<i64, DomainError> {
        self.repo.count_since(cutoff(days)).await
    }

    pub async fn stats(&self, days: u32) -> Result<PromptStats, DomainError> {
        let total_prompts = self.count(days).await?;
        let recent_prompts = self.recent_history(days).await?.len();

        Ok(PromptStats {
            total_prompts,
            recent_prompts,
            period_days: days,
        })
    }

    /// Records with a given template type label, newest first
    pub async fn history_by_template(
        &self,
        template_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError> {
        self.repo.find_by_template_type(template_type).await
    }

    /// Records for an app type / test type pair, newest first
    pub async fn history_by_app_and_test_type(
        &self,
        app_type: &str,
        test_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError> {
        self.repo
            .find_by_app_and_test_type(app_type, test_type)
            .await
    }
}

/// Start of a `days`-long window ending now.
///
/// History cannot predate the Unix epoch, so longer windows are clamped to it.
fn cutoff(days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .map_or(DateTime::UNIX_EPOCH, |start| start.max(DateTime::UNIX_EPOCH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryHistoryRepository, ScriptedCompletionClient};
    use autoprompt::AiResult;

    type TestService = PromptService<InMemoryHistoryRepository, ScriptedCompletionClient>;

    fn service_with(
        result: AiResult,
    ) -> (
        TestService,
        Arc<InMemoryHistoryRepository>,
        Arc<ScriptedCompletionClient>,
    ) {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        let ai = Arc::new(ScriptedCompletionClient::new(result));
        let service = PromptService::new(
            repo.clone(),
            ai.clone(),
            Arc::new(TemplateCatalog::builtin()),
        );
        (service, repo, ai)
    }

    fn login_spec() -> PromptSpec {
        PromptSpec::new("web", "e2e", "cypress", "Login Feature", "javascript")
            .with_feature_description("User authentication system")
            .with_requirements(["Test data setup", "Error handling"])
    }

    fn seed(repo: &InMemoryHistoryRepository, days_ago: i64) {
        repo.insert_at(
            NewHistoryRecord::template("api", "body"),
            Utc::now() - Duration::days(days_ago) + Duration::minutes(1),
        );
    }

    #[tokio::test]
    async fn test_generate_success() {
        let (service, repo, ai) = service_with(AiResult::Generated("it('logs in')".to_string()));

        let outcome = service.generate(&login_spec()).await.unwrap();

        assert_eq!(outcome.text, "it('logs in')");
        assert_eq!(outcome.label, "custom");
        assert_eq!(ai.prompts(), vec![login_spec().render()]);

        let records = repo.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].feature_name, "Login Feature");
        assert_eq!(records[0].template_type.as_deref(), Some("custom"));
        assert_eq!(records[0].generated_prompt.as_deref(), Some("it('logs in')"));
    }

    #[tokio::test]
    async fn test_generate_ai_failure_still_persisted() {
        let (service, repo, _) = service_with(AiResult::failed("connection refused"));

        let outcome = service.generate(&login_spec()).await.unwrap();

        assert!(outcome.text.starts_with("Error:"));
        assert_eq!(outcome.label, "custom");

        let records = repo.records();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].generated_prompt.as_deref(),
            Some("Error: connection refused")
        );
    }

    #[tokio::test]
    async fn test_generate_propagates_repository_error() {
        let service = PromptService::new(
            Arc::new(InMemoryHistoryRepository::failing()),
            Arc::new(ScriptedCompletionClient::new(AiResult::Generated("ok".into()))),
            Arc::new(TemplateCatalog::builtin()),
        );

        let err = service.generate(&login_spec()).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }

    #[tokio::test]
    async fn test_template_hit_writes_bookkeeping_record() {
        let (service, repo, ai) = service_with(AiResult::Generated("unused".into()));

        let outcome = service.template("web-e2e").await.unwrap();

        let body = TemplateCatalog::builtin().lookup("web-e2e").unwrap();
        assert_eq!(outcome.text, body);
        assert_eq!(outcome.label, "web-e2e");
        assert!(ai.prompts().is_empty());

        let records = repo.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].app_type, "template");
        assert_eq!(records[0].programming_language, "template");
        assert_eq!(records[0].feature_name, "Template: web-e2e");
        assert_eq!(records[0].template_type.as_deref(), Some("web-e2e"));
        assert_eq!(records[0].generated_prompt.as_deref(), Some(body));
    }

    #[tokio::test]
    async fn test_template_miss_is_soft_and_not_persisted() {
        let (service, repo, _) = service_with(AiResult::Generated("unused".into()));

        let outcome = service.template("nonexistent-xyz").await.unwrap();

        assert_eq!(outcome.text, "Template not found");
        assert_eq!(outcome.label, "nonexistent-xyz");
        assert!(repo.records().is_empty());
    }

    #[tokio::test]
    async fn test_available_templates() {
        let (service, _, _) = service_with(AiResult::Generated("unused".into()));
        let names = service.available_templates();

        assert_eq!(names.len(), 6);
        assert!(names.contains(&"web-e2e".to_string()));
        assert!(names.contains(&"performance".to_string()));
    }

    #[tokio::test]
    async fn test_recent_history_window_and_order() {
        let (service, repo, _) = service_with(AiResult::Generated("unused".into()));
        seed(&repo, 10);
        seed(&repo, 3);
        seed(&repo, 1);

        let week = service.recent_history(7).await.unwrap();
        assert_eq!(week.len(), 2);
        assert!(week[0].created_at > week[1].created_at);

        assert_eq!(service.recent_history(30).await.unwrap().len(), 3);
        assert!(service.recent_history(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_grows_with_days_and_matches_count() {
        let (service, repo, _) = service_with(AiResult::Generated("unused".into()));
        for days_ago in [0, 2, 5, 9, 20] {
            seed(&repo, days_ago);
        }

        let mut previous = 0;
        for days in [0, 1, 3, 7, 14, 30] {
            let history = service.recent_history(days).await.unwrap();
            let count = service.count(days).await.unwrap();
            assert_eq!(count, history.len() as i64);
            assert!(history.len() >= previous);
            previous = history.len();
        }
    }

    #[test]
    fn test_cutoff_clamps_to_epoch() {
        assert_eq!(cutoff(100_000_000), DateTime::UNIX_EPOCH);
        assert_eq!(cutoff(u32::MAX), DateTime::UNIX_EPOCH);

        let week = cutoff(7);
        assert!(week > DateTime::UNIX_EPOCH);
        assert!(week < Utc::now() - Duration::days(6));
    }

    #[tokio::test]
    async fn test_huge_window_returns_everything() {
        let (service, repo, _) = service_with(AiResult::Generated("unused".into()));
        seed(&repo, 2);
        seed(&repo, 400);

        assert_eq!(service.recent_history(u32::MAX).await.unwrap().len(), 2);

        let stats = service.stats(100_000_000).await.unwrap();
        assert_eq!(stats.total_prompts, 2);
        assert_eq!(stats.recent_prompts, 2);
        assert_eq!(stats.period_days, 100_000_000);
    }

    #[tokio::test]
    async fn test_stats() {
        let (service, repo, _) = service_with(AiResult::Generated("unused".into()));
        seed(&repo, 2);
        service.template("unit").await.unwrap();

        let stats = service.stats(7).await.unwrap();
        assert_eq!(
            stats,
            PromptStats {
                total_prompts: 2,
                recent_prompts: 2,
                period_days: 7,
            }
        );
    }

    #[tokio::test]
    async fn test_history_filters() {
        let (service, _, _) = service_with(AiResult::Generated("generated".into()));
        service.generate(&login_spec()).await.unwrap();
        service.template("api").await.unwrap();
        service.template("api").await.unwrap();

        let api = service.history_by_template("api").await.unwrap();
        assert_eq!(api.len(), 2);
        assert!(api[0].id > api[1].id);

        let custom = service.history_by_template("custom").await.unwrap();
        assert_eq!(custom.len(), 1);

        let web_e2e = service
            .history_by_app_and_test_type("web", "e2e")
            .await
            .unwrap();
        assert_eq!(web_e2e.len(), 1);
        assert_eq!(web_e2e[0].feature_name, "Login Feature");
    }
}
