// UI test generation: story blocks and raw feature files become one
// Playwright spec descriptor each.

use serde_json::json;

use crate::cli::UiFramework;
use crate::generator::descriptor::{Classification, TestDescriptor};
use crate::generator::steps::{match_step, playwright_line, ActionStatement};
use crate::parser::feature_name;
use crate::parser::stories::{parse_stories, StoryBlock};
use crate::utils::slug;

/// Default name for a story whose title normalizes to an empty slug
const FALLBACK_STORY_NAME: &str = "story";

/// Default name for a feature file when both the Feature line and the file
/// stem normalize to empty slugs
const FALLBACK_FEATURE_NAME: &str = "feature";

/// Labels assumed for raw feature files, which carry no label metadata
fn feature_labels() -> Vec<String> {
    vec!["ui".to_string(), "regression".to_string()]
}

/// Parses a Markdown stories document and produces one descriptor per
/// test-bearing story, in document order.
pub fn descriptors_from_stories(md: &str, framework: UiFramework) -> Vec<TestDescriptor> {
    parse_stories(md)
        .iter()
        .map(|block| descriptor_from_block(block, framework))
        .collect()
}

fn descriptor_from_block(block: &StoryBlock, framework: UiFramework) -> TestDescriptor {
    let name = match slug(&block.title) {
        s if s.is_empty() => FALLBACK_STORY_NAME.to_string(),
        s => s,
    };
    build_ui_descriptor(name, &block.labels, block.step_lines(), framework)
}

/// Produces a descriptor for one raw `.feature` file. The display name comes
/// from the `Feature:` line, falling back to the file stem; raw features
/// carry the fixed ui/regression labels.
pub fn descriptor_from_feature(
    gherkin: &str,
    fallback_stem: &str,
    framework: UiFramework,
) -> TestDescriptor {
    let name = match feature_name(gherkin, fallback_stem) {
        s if s.is_empty() => FALLBACK_FEATURE_NAME.to_string(),
        s => s,
    };

    let step_lines = gherkin
        .lines()
        .map(str::trim)
        .filter(|l| crate::parser::StepKind::detect(l).is_some())
        .collect();

    build_ui_descriptor(name, &feature_labels(), step_lines, framework)
}

fn build_ui_descriptor(
    name: String,
    labels: &[String],
    step_lines: Vec<&str>,
    framework: UiFramework,
) -> TestDescriptor {
    let actions: Vec<ActionStatement> = step_lines
        .iter()
        .flat_map(|line| match_step(line))
        .collect();

    let steps: Vec<String> = actions.iter().map(playwright_line).collect();
    let classification = Classification::from_labels(labels);

    TestDescriptor {
        relative_path: format!("ui/{}/tests/{}.spec.ts", framework.dir_name(), name).into(),
        template: "playwright/spec.spec.ts".to_string(),
        context: json!({
            "name": name,
            "labels": labels,
            "steps": steps,
            "base_url_var": "process.env.BASE_URL",
            "test_type": classification.test_type,
            "layer": classification.layer,
        }),
        actions,
        classification,
        artifact_name: name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_story_end_to_end() {
        let md = "### Story: Login with valid user\ngherkin:\n```\nGiven I am logged in as 'alice'\n```\n";
        let descriptors = descriptors_from_stories(md, UiFramework::Playwright);

        assert_eq!(descriptors.len(), 1);
        let d = &descriptors[0];
        assert_eq!(d.artifact_name, "login_with_valid_user");
        assert_eq!(d.actions.len(), 5);
        assert_eq!(
            d.relative_path.to_str(),
            Some("ui/playwright/tests/login_with_valid_user.spec.ts")
        );
        assert_eq!(d.actions[0], ActionStatement::Navigate { path: "/login".into() });
        assert_eq!(d.actions[4], ActionStatement::AssertDashboardVisible);
    }

    #[test]
    fn untitled_story_gets_fallback_name() {
        let md = "### Story: !!!\ngherkin:\n```\nGiven I am on the login page\n```\n";
        let descriptors = descriptors_from_stories(md, UiFramework::Playwright);
        assert_eq!(descriptors[0].artifact_name, "story");
    }

    #[test]
    fn classification_flows_into_context() {
        let md = "### Story: T\nlabels: @api, @smoke\ngherkin:\n```\nGiven I am on the login page\n```\n";
        let d = &descriptors_from_stories(md, UiFramework::Playwright)[0];
        assert_eq!(d.classification.test_type, "smoke");
        assert_eq!(d.classification.layer, "api");
        assert_eq!(d.context["test_type"], "smoke");
        assert_eq!(d.context["layer"], "api");
    }

    #[test]
    fn unknown_steps_survive_as_todo_lines() {
        let md = "### Story: T\ngherkin:\n```\nGiven something nobody implemented\n```\n";
        let d = &descriptors_from_stories(md, UiFramework::Playwright)[0];
        assert_eq!(d.actions.len(), 1);
        let steps = d.context["steps"].as_array().unwrap();
        assert!(steps[0]
            .as_str()
            .unwrap()
            .contains("TODO: Implement step: Given something nobody implemented"));
    }

    #[test]
    fn feature_file_descriptor_uses_fixed_labels() {
        let gherkin = "Feature: Account Overview\n\nScenario: Balances\nGiven I am logged in as 'bob'\nThen I should see 'Balance'\n";
        let d = descriptor_from_feature(gherkin, "overview", UiFramework::Playwright);

        assert_eq!(d.artifact_name, "account_overview");
        assert_eq!(d.classification.test_type, "regression");
        assert_eq!(d.classification.layer, "ui");
        // Feature and Scenario lines go through the matcher too and come out
        // as placeholders; the two real steps expand to 5 + 1 actions.
        assert_eq!(d.actions.len(), 8);
    }

    #[test]
    fn feature_without_header_uses_stem() {
        let d = descriptor_from_feature("Given I am on the login page\n", "smoke-login", UiFramework::Playwright);
        assert_eq!(d.artifact_name, "smoke_login");
    }
}
