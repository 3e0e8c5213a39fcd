//! History and stats DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use autoprompt::HistoryRecord;

use crate::application::PromptStats;

pub const DEFAULT_HISTORY_DAYS: u32 = 7;

fn default_days() -> u32 {
    DEFAULT_HISTORY_DAYS
}

/// `?days=N` window, defaulting to a week
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Window size in days
    #[serde(default = "default_days")]
    pub days: u32,
}

/// `?appType=&testType=` filter
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TypeQuery {
    pub app_type: String,
    pub test_type: String,
}

/// Stored history record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordResponse {
    pub id: i64,
    pub app_type: String,
    pub test_type: String,
    pub framework: String,
    pub feature_name: String,
    pub programming_language: String,
    pub generated_prompt: Option<String>,
    pub template_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryRecord> for HistoryRecordResponse {
    fn from(record: HistoryRecord) -> Self {
        Self {
            id: record.id,
            app_type: record.app_type,
            test_type: record.test_type,
            framework: record.framework,
            feature_name: record.feature_name,
            programming_language: record.programming_language,
            generated_prompt: record.generated_prompt,
            template_type: record.template_type,
            created_at: record.created_at,
        }
    }
}

/// Usage statistics for a window
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_prompts: i64,
    pub recent_prompts: usize,
    /// e.g. `"7 days"`
    pub period: String,
}

impl From<PromptStats> for StatsResponse {
    fn from(stats: PromptStats) -> Self {
        Self {
            total_prompts: stats.total_prompts,
            recent_prompts: stats.recent_prompts,
            period: format!("{} days", stats.period_days),
        }
    }
}
