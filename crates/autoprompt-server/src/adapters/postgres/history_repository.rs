//! PostgreSQL implementation of HistoryRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use autoprompt::{DomainError, HistoryRecord, HistoryRepository, NewHistoryRecord};

/// PostgreSQL implementation of HistoryRepository
pub struct PgHistoryRepository {
    pool: PgPool,
}

impl PgHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: i64,
    app_type: String,
    test_type: String,
    framework: String,
    feature_name: String,
    programming_language: String,
    generated_prompt: Option<String>,
    template_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<HistoryRow> for HistoryRecord {
    fn from(row: HistoryRow) -> Self {
        Self {
            id: row.id,
            app_type: row.app_type,
            test_type: row.test_type,
            framework: row.framework,
            feature_name: row.feature_name,
            programming_language: row.programming_language,
            generated_prompt: row.generated_prompt,
            template_type: row.template_type,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn save(&self, record: NewHistoryRecord) -> Result<HistoryRecord, DomainError> {
        let row = sqlx::query_as::<_, HistoryRow>(
            r#"
            INSERT INTO prompt_history
                (app_type, test_type, framework, feature_name, programming_language,
                 generated_prompt, template_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&record.app_type)
        .bind(&record.test_type)
        .bind(&record.framework)
        .bind(&record.feature_name)
        .bind(&record.programming_language)
        .bind(&record.generated_prompt)
        .bind(&record.template_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<HistoryRecord>, DomainError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT * FROM prompt_history WHERE created_at >= $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<i64, DomainError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prompt_history WHERE created_at >= $1")
                .bind(cutoff)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(count)
    }

    async fn find_by_template_type(
        &self,
        template_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT * FROM prompt_history WHERE template_type = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(template_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_app_and_test_type(
        &self,
        app_type: &str,
        test_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT * FROM prompt_history
            WHERE app_type = $1 AND test_type = $2
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(app_type)
        .bind(test_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
