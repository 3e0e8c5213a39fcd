//! In-memory fakes for service and route tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use autoprompt::{
    AiResult, CompletionClient, DomainError, HistoryRecord, HistoryRepository, NewHistoryRecord,
};

/// HistoryRepository backed by a Vec
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    records: Mutex<Vec<HistoryRecord>>,
    failing: bool,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose every operation fails
    pub fn failing() -> Self {
        Self {
            records: Mutex::default(),
            failing: true,
        }
    }

    /// Seed a record with an explicit creation time
    pub fn insert_at(&self, record: NewHistoryRecord, created_at: DateTime<Utc>) -> HistoryRecord {
        let mut records = self.records.lock().unwrap();
        let stored = HistoryRecord {
            id: records.len() as i64 + 1,
            app_type: record.app_type,
            test_type: record.test_type,
            framework: record.framework,
            feature_name: record.feature_name,
            programming_language: record.programming_language,
            generated_prompt: Some(record.generated_prompt),
            template_type: Some(record.template_type),
            created_at,
        };
        records.push(stored.clone());
        stored
    }

    pub fn records(&self) -> Vec<HistoryRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(DomainError::Repository("database unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn select(&self, keep: impl Fn(&HistoryRecord) -> bool) -> Vec<HistoryRecord> {
        let mut found: Vec<HistoryRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| keep(r))
            .cloned()
            .collect();
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        found
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn save(&self, record: NewHistoryRecord) -> Result<HistoryRecord, DomainError> {
        self.check()?;
        Ok(self.insert_at(record, Utc::now()))
    }

    async fn find_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<HistoryRecord>, DomainError> {
        self.check()?;
        Ok(self.select(|r| r.created_at >= cutoff))
    }

    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<i64, DomainError> {
        self.check()?;
        Ok(self.select(|r| r.created_at >= cutoff).len() as i64)
    }

    async fn find_by_template_type(
        &self,
        template_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError> {
        self.check()?;
        Ok(self.select(|r| r.template_type.as_deref() == Some(template_type)))
    }

    async fn find_by_app_and_test_type(
        &self,
        app_type: &str,
        test_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError> {
        self.check()?;
        Ok(self.select(|r| r.app_type == app_type && r.test_type == test_type))
    }
}

/// CompletionClient that answers every prompt with the same result
pub struct ScriptedCompletionClient {
    result: AiResult,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletionClient {
    pub fn new(result: AiResult) -> Self {
        Self {
            result,
            prompts: Mutex::default(),
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(&self, prompt: &str) -> AiResult {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.result.clone()
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}
