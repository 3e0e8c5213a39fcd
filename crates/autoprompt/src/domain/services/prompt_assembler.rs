//! Prompt Assembler
//!
//! Renders a [`PromptSpec`] into the labeled, line-oriented prompt that is
//! sent to the AI provider.

use crate::domain::entities::PromptSpec;

/// Render a spec as `"<Label>: <value>\n"` lines in a fixed order.
///
/// Required fields always produce a line (even when empty). Optional fields
/// produce a line only when present and non-empty; requirements are joined
/// with `", "` in input order.
pub fn render_prompt(spec: &PromptSpec) -> String {
    let mut prompt = String::new();

    push_line(&mut prompt, "App Type", &spec.app_type);
    push_line(&mut prompt, "Test Type", &spec.test_type);
    push_line(&mut prompt, "Framework", &spec.framework);
    push_line(&mut prompt, "Feature Name", &spec.feature_name);
    push_optional(&mut prompt, "Feature Description", &spec.feature_description);
    push_optional(&mut prompt, "User Story", &spec.user_story);
    push_line(&mut prompt, "Programming Language", &spec.programming_language);
    push_optional(&mut prompt, "Scenarios", &spec.scenarios);
    push_optional(&mut prompt, "Test Data", &spec.test_data);
    push_optional(&mut prompt, "Environment", &spec.environment);
    push_optional(&mut prompt, "Constraints", &spec.constraints);
    push_optional(&mut prompt, "Additional Notes", &spec.additional_notes);

    if let Some(requirements) = spec.requirements.as_deref().filter(|r| !r.is_empty()) {
        push_line(&mut prompt, "Requirements", &requirements.join(", "));
    }

    prompt
}

fn push_line(prompt: &mut String, label: &str, value: &str) {
    prompt.push_str(&format!("{}: {}\n", label, value));
}

fn push_optional(prompt: &mut String, label: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        push_line(prompt, label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_spec() -> PromptSpec {
        PromptSpec::new("web", "e2e", "cypress", "Login Feature", "javascript")
            .with_requirements(["Test data setup", "Error handling"])
    }

    #[test]
    fn test_minimal_spec_with_requirements() {
        let prompt = render_prompt(&login_spec());

        assert_eq!(
            prompt,
            "App Type: web\n\
             Test Type: e2e\n\
             Framework: cypress\n\
             Feature Name: Login Feature\n\
             Programming Language: javascript\n\
             Requirements: Test data setup, Error handling\n"
        );
        assert_eq!(prompt.lines().count(), 6);
        assert!(prompt.ends_with("Requirements: Test data setup, Error handling\n"));
        assert!(!prompt.contains("\n\n"));
    }

    #[test]
    fn test_full_spec_field_order() {
        let spec = PromptSpec::new("web", "e2e", "cypress", "Login Feature", "javascript")
            .with_feature_description("User authentication system")
            .with_user_story("As a user I want to log in")
            .with_scenarios("- Valid login\n- Invalid credentials")
            .with_test_data("user@example.com")
            .with_environment("staging")
            .with_constraints("no external calls")
            .with_additional_notes("use fixtures")
            .with_requirements(["A", "B", "C"]);

        let rendered = render_prompt(&spec);
        let labels: Vec<&str> = rendered
            .lines()
            .filter_map(|line| line.split_once(": ").map(|(label, _)| label))
            .collect();

        assert_eq!(
            labels,
            vec![
                "App Type",
                "Test Type",
                "Framework",
                "Feature Name",
                "Feature Description",
                "User Story",
                "Programming Language",
                "Scenarios",
                "Test Data",
                "Environment",
                "Constraints",
                "Additional Notes",
                "Requirements",
            ]
        );
    }

    #[test]
    fn test_empty_optionals_produce_no_lines() {
        let spec = PromptSpec::new("api", "api", "pytest", "Orders", "python")
            .with_feature_description("")
            .with_environment("")
            .with_requirements(Vec::<String>::new());

        let prompt = render_prompt(&spec);

        assert_eq!(prompt.lines().count(), 5);
        assert!(!prompt.contains("Feature Description"));
        assert!(!prompt.contains("Environment"));
        assert!(!prompt.contains("Requirements"));
    }

    #[test]
    fn test_empty_required_fields_still_render() {
        let spec = PromptSpec::new("", "unit", "", "Parser", "rust");
        let prompt = render_prompt(&spec);

        assert!(prompt.starts_with("App Type: \nTest Type: unit\nFramework: \n"));
    }

    #[test]
    fn test_requirements_keep_input_order() {
        let spec = PromptSpec::new("web", "e2e", "playwright", "Cart", "typescript")
            .with_requirements(["zeta", "alpha", "mid"]);

        assert!(render_prompt(&spec).ends_with("Requirements: zeta, alpha, mid\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let spec = login_spec().with_scenarios("- Logout");
        assert_eq!(render_prompt(&spec), render_prompt(&spec.clone()));
        assert_eq!(spec.render(), render_prompt(&spec));
    }
}
