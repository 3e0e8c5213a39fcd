//! History Repository Port
//!
//! Abstract interface for HistoryRecord persistence operations.
//! Identifier assignment, `created_at` stamping and transaction isolation
//! belong to the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{errors::DomainError, HistoryRecord, NewHistoryRecord};

/// Repository interface for HistoryRecord entities
///
/// Every list query returns records newest first (`created_at` descending,
/// insertion order breaking ties).
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Insert a record; the store assigns `id` and `created_at`
    async fn save(&self, record: NewHistoryRecord) -> Result<HistoryRecord, DomainError>;

    /// Records created at or after `cutoff`
    async fn find_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<HistoryRecord>, DomainError>;

    /// Number of records created at or after `cutoff`
    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<i64, DomainError>;

    /// Records with the given template type label
    async fn find_by_template_type(
        &self,
        template_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError>;

    /// Records for an app type / test type pair
    async fn find_by_app_and_test_type(
        &self,
        app_type: &str,
        test_type: &str,
    ) -> Result<Vec<HistoryRecord>, DomainError>;
}
