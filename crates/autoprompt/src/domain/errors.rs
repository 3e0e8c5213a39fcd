//! Domain Errors
//!
//! Error types for domain operations.
//!
//! AI provider failures are not errors here: they travel as
//! [`AiResult::Failed`](crate::domain::AiResult) and end up as stored text.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    /// Validation error listing the blank required fields
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::Validation(format!("required fields missing: {}", fields.join(", ")))
    }
}
