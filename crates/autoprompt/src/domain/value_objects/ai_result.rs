//! AiResult - Outcome of one AI completion request

use serde::{Deserialize, Serialize};

/// Prefix carried by failure text once it is stored or returned
pub const AI_ERROR_PREFIX: &str = "Error: ";

/// Outcome of an AI completion: generated text or a failure diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum AiResult {
    /// Text produced by the provider
    Generated(String),
    /// Short diagnostic (transport error, bad status, unexpected body)
    Failed(String),
}

impl AiResult {
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self::Failed(diagnostic.into())
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Text as exposed to API consumers and history: failures become
    /// `"Error: <diagnostic>"`.
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Failed(diagnostic) => format!("{}{}", AI_ERROR_PREFIX, diagnostic),
        }
    }
}
