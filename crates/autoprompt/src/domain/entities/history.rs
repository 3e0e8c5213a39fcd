//! HistoryRecord - Audit trail of generated prompts
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PromptSpec;

/// Label stored and returned for AI generation requests
pub const CUSTOM_GENERATION_LABEL: &str = "custom";

/// Value written to every descriptive column of a template bookkeeping record
pub const TEMPLATE_MARKER: &str = "template";

/// HistoryRecord - One persisted generate or template invocation
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub app_type: String,
    pub test_type: String,
    pub framework: String,
    pub feature_name: String,
    pub programming_language: String,
    /// AI output, failure text ("Error: ...") or template body
    pub generated_prompt: Option<String>,
    /// "custom" for AI generation, otherwise the template name
    pub template_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a HistoryRecord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryRecord {
    pub app_type: String,
    pub test_type: String,
    pub framework: String,
    pub feature_name: String,
    pub programming_language: String,
    pub generated_prompt: String,
    pub template_type: String,
}

impl NewHistoryRecord {
    /// Record for an AI generation request
    pub fn generated(spec: &PromptSpec, generated_prompt: String) -> Self {
        Self {
            app_type: spec.app_type.clone(),
            test_type: spec.test_type.clone(),
            framework: spec.framework.clone(),
            feature_name: spec.feature_name.clone(),
            programming_language: spec.programming_language.clone(),
            generated_prompt,
            template_type: CUSTOM_GENERATION_LABEL.to_string(),
        }
    }

    /// Bookkeeping record for a served template
    pub fn template(name: &str, body: &str) -> Self {
        Self {
            app_type: TEMPLATE_MARKER.to_string(),
            test_type: TEMPLATE_MARKER.to_string(),
            framework: TEMPLATE_MARKER.to_string(),
            feature_name: format!("Template: {}", name),
            programming_language: TEMPLATE_MARKER.to_string(),
            generated_prompt: body.to_string(),
            template_type: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_record_marks_every_column() {
        let record = NewHistoryRecord::template("api", "body text");

        assert_eq!(record.app_type, "template");
        assert_eq!(record.test_type, "template");
        assert_eq!(record.framework, "template");
        assert_eq!(record.programming_language, "template");
        assert_eq!(record.feature_name, "Template: api");
        assert_eq!(record.template_type, "api");
        assert_eq!(record.generated_prompt, "body text");
    }

    #[test]
    fn test_generated_record_copies_spec_fields() {
        let spec = PromptSpec::new("web", "e2e", "cypress", "Login Feature", "javascript")
            .with_scenarios("- Valid login");
        let record = NewHistoryRecord::generated(&spec, "tests...".to_string());

        assert_eq!(record.app_type, "web");
        assert_eq!(record.test_type, "e2e");
        assert_eq!(record.framework, "cypress");
        assert_eq!(record.feature_name, "Login Feature");
        assert_eq!(record.programming_language, "javascript");
        assert_eq!(record.generated_prompt, "tests...");
        assert_eq!(record.template_type, "custom");
    }
}
