//! PromptSpec - Structured test automation requirements
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::services::render_prompt;

/// PromptSpec - Input to prompt assembly
///
/// The five required fields are plain strings; whether they are blank is
/// checked by [`PromptSpec::validate`] at the boundary, never during
/// rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub app_type: String,
    pub test_type: String,
    pub framework: String,
    pub feature_name: String,
    pub programming_language: String,
    pub feature_description: Option<String>,
    pub user_story: Option<String>,
    pub scenarios: Option<String>,
    pub test_data: Option<String>,
    pub environment: Option<String>,
    pub constraints: Option<String>,
    pub additional_notes: Option<String>,
    pub requirements: Option<Vec<String>>,
}

impl PromptSpec {
    /// Create a spec with only the required fields set
    pub fn new(
        app_type: impl Into<String>,
        test_type: impl Into<String>,
        framework: impl Into<String>,
        feature_name: impl Into<String>,
        programming_language: impl Into<String>,
    ) -> Self {
        Self {
            app_type: app_type.into(),
            test_type: test_type.into(),
            framework: framework.into(),
            feature_name: feature_name.into(),
            programming_language: programming_language.into(),
            ..Default::default()
        }
    }

    pub fn with_feature_description(mut self, value: impl Into<String>) -> Self {
        self.feature_description = Some(value.into());
        self
    }

    pub fn with_user_story(mut self, value: impl Into<String>) -> Self {
        self.user_story = Some(value.into());
        self
    }

    pub fn with_scenarios(mut self, value: impl Into<String>) -> Self {
        self.scenarios = Some(value.into());
        self
    }

    pub fn with_test_data(mut self, value: impl Into<String>) -> Self {
        self.test_data = Some(value.into());
        self
    }

    pub fn with_environment(mut self, value: impl Into<String>) -> Self {
        self.environment = Some(value.into());
        self
    }

    pub fn with_constraints(mut self, value: impl Into<String>) -> Self {
        self.constraints = Some(value.into());
        self
    }

    pub fn with_additional_notes(mut self, value: impl Into<String>) -> Self {
        self.additional_notes = Some(value.into());
        self
    }

    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements = Some(requirements.into_iter().map(Into::into).collect());
        self
    }

    /// Names (wire casing) of required fields that are blank
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("appType", &self.app_type),
            ("testType", &self.test_type),
            ("framework", &self.framework),
            ("featureName", &self.feature_name),
            ("programmingLanguage", &self.programming_language),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Reject specs with blank required fields
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = self.missing_required_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::missing_fields(&missing))
        }
    }

    /// Render the labeled plain-text prompt
    pub fn render(&self) -> String {
        render_prompt(self)
    }
}
