// Gherkin step pattern matcher. A fixed, ordered table of recognized step
// patterns maps each step line to framework-level action statements; the
// first matching pattern wins and anything unrecognized degrades to a single
// placeholder action carrying the verbatim step text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Password used by the `Given I am logged in as '<user>'` composite, which
/// names a user but not a password.
const IMPLICIT_PASSWORD: &str = "password";

/// One framework-level instruction derived from a Gherkin step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatement {
    /// Navigate the browser to a path under the base URL
    Navigate { path: String },

    /// Fill an input located by a selector
    Fill { selector: String, value: String },

    /// Click an element located by a selector
    Click { selector: String },

    /// Assert the dashboard heading is visible
    AssertDashboardVisible,

    /// Assert the given text is visible on the page
    AssertTextVisible { text: String },

    /// A step outside the recognized vocabulary, kept verbatim so the
    /// generated artifact stays reviewable. Never silently dropped.
    Unimplemented { step: String },
}

type Handler = fn(&Captures) -> Vec<ActionStatement>;

fn navigate_login(_: &Captures) -> Vec<ActionStatement> {
    vec![ActionStatement::Navigate { path: "/login".into() }]
}

fn login_with(caps: &Captures) -> Vec<ActionStatement> {
    vec![
        ActionStatement::Fill { selector: "#username".into(), value: caps[1].to_string() },
        ActionStatement::Fill { selector: "#password".into(), value: caps[2].to_string() },
        ActionStatement::Click { selector: "button[type=submit]".into() },
    ]
}

fn assert_dashboard(_: &Captures) -> Vec<ActionStatement> {
    vec![ActionStatement::AssertDashboardVisible]
}

// Convenience composite: logging in as a named user implies the full
// navigate/fill/submit/verify sequence with the fixed password.
fn login_as(caps: &Captures) -> Vec<ActionStatement> {
    vec![
        ActionStatement::Navigate { path: "/login".into() },
        ActionStatement::Fill { selector: "#username".into(), value: caps[1].to_string() },
        ActionStatement::Fill { selector: "#password".into(), value: IMPLICIT_PASSWORD.into() },
        ActionStatement::Click { selector: "button[type=submit]".into() },
        ActionStatement::AssertDashboardVisible,
    ]
}

fn click_element(caps: &Captures) -> Vec<ActionStatement> {
    vec![ActionStatement::Click { selector: format!("text={}", &caps[1]) }]
}

fn assert_text(caps: &Captures) -> Vec<ActionStatement> {
    vec![ActionStatement::AssertTextVisible { text: caps[1].to_string() }]
}

fn fill_field(caps: &Captures) -> Vec<ActionStatement> {
    vec![ActionStatement::Fill {
        selector: format!("text={}", &caps[1]),
        value: caps[2].to_string(),
    }]
}

// The closed dispatch table. Order is priority order: the composite login
// pattern must be tried before the generic ones would get a chance to
// partially match, and no pattern may fall through silently.
static PATTERNS: Lazy<Vec<(Regex, Handler)>> = Lazy::new(|| {
    let table: Vec<(&str, Handler)> = vec![
        (r"(?i)^Given I am on the login page$", navigate_login),
        (r"(?i)^When I login as '(.+)'/'(.+)'$", login_with),
        (r"(?i)^Then I should see the dashboard$", assert_dashboard),
        (r"(?i)^Given I am logged in as '(.+)'$", login_as),
        (r"(?i)^When I click on '(.+)'$", click_element),
        (r"(?i)^Then I should see '(.+)'$", assert_text),
        (r"(?i)^When I fill '(.+)' with '(.+)'$", fill_field),
    ];

    table
        .into_iter()
        .map(|(pattern, handler)| (Regex::new(pattern).unwrap(), handler))
        .collect()
});

/// Maps one Gherkin step line to its action statements. Recognized steps
/// produce at least one action; unrecognized steps produce exactly one
/// `Unimplemented` action — never zero.
pub fn match_step(line: &str) -> Vec<ActionStatement> {
    let line = line.trim();

    for (pattern, handler) in PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            return handler(&caps);
        }
    }

    vec![ActionStatement::Unimplemented { step: line.to_string() }]
}

/// Renders one action as a line of Playwright test code.
pub fn playwright_line(action: &ActionStatement) -> String {
    match action {
        ActionStatement::Navigate { path } => {
            format!("await page.goto(baseUrl + '{}');", path)
        }
        ActionStatement::Fill { selector, value } => {
            format!("await page.fill('{}', '{}');", selector, value)
        }
        ActionStatement::Click { selector } => {
            format!("await page.click('{}');", selector)
        }
        ActionStatement::AssertDashboardVisible => {
            "await expect(page.getByText(/dashboard/i)).toBeVisible();".to_string()
        }
        ActionStatement::AssertTextVisible { text } => {
            format!("await expect(page.getByText('{}')).toBeVisible();", text)
        }
        ActionStatement::Unimplemented { step } => {
            format!("// TODO: Implement step: {}", step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_to_login_page() {
        let actions = match_step("Given I am on the login page");
        assert_eq!(actions, vec![ActionStatement::Navigate { path: "/login".into() }]);
    }

    #[test]
    fn login_with_credentials_yields_three_actions() {
        let actions = match_step("When I login as 'alice'/'s3cret'");
        assert_eq!(
            actions,
            vec![
                ActionStatement::Fill { selector: "#username".into(), value: "alice".into() },
                ActionStatement::Fill { selector: "#password".into(), value: "s3cret".into() },
                ActionStatement::Click { selector: "button[type=submit]".into() },
            ]
        );
    }

    #[test]
    fn logged_in_as_composite_yields_five_actions() {
        let actions = match_step("Given I am logged in as 'alice'");
        assert_eq!(actions.len(), 5);
        assert_eq!(actions[0], ActionStatement::Navigate { path: "/login".into() });
        assert_eq!(
            actions[1],
            ActionStatement::Fill { selector: "#username".into(), value: "alice".into() }
        );
        assert_eq!(
            actions[2],
            ActionStatement::Fill { selector: "#password".into(), value: "password".into() }
        );
        assert_eq!(actions[3], ActionStatement::Click { selector: "button[type=submit]".into() });
        assert_eq!(actions[4], ActionStatement::AssertDashboardVisible);
    }

    #[test]
    fn dashboard_assertion() {
        assert_eq!(
            match_step("Then I should see the dashboard"),
            vec![ActionStatement::AssertDashboardVisible]
        );
    }

    #[test]
    fn click_and_text_assertions_capture_arguments() {
        assert_eq!(
            match_step("When I click on 'Logout'"),
            vec![ActionStatement::Click { selector: "text=Logout".into() }]
        );
        assert_eq!(
            match_step("Then I should see 'Welcome back'"),
            vec![ActionStatement::AssertTextVisible { text: "Welcome back".into() }]
        );
    }

    #[test]
    fn fill_field_with_value() {
        assert_eq!(
            match_step("When I fill 'Amount' with '100'"),
            vec![ActionStatement::Fill { selector: "text=Amount".into(), value: "100".into() }]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            match_step("given i am on the login page"),
            vec![ActionStatement::Navigate { path: "/login".into() }]
        );
    }

    #[test]
    fn unknown_step_yields_exactly_one_placeholder() {
        let actions = match_step("When I wave my hands");
        assert_eq!(
            actions,
            vec![ActionStatement::Unimplemented { step: "When I wave my hands".into() }]
        );
    }

    #[test]
    fn every_step_line_yields_at_least_one_action() {
        for line in [
            "Given I am on the login page",
            "When I login as 'a'/'b'",
            "Then I should see the dashboard",
            "Given I am logged in as 'x'",
            "When I click on 'y'",
            "Then I should see 'z'",
            "When I fill 'f' with 'v'",
            "And something nobody understands",
        ] {
            assert!(!match_step(line).is_empty(), "no actions for {:?}", line);
        }
    }

    #[test]
    fn placeholder_renders_as_todo_comment() {
        let line = playwright_line(&ActionStatement::Unimplemented {
            step: "When I wave".into(),
        });
        assert_eq!(line, "// TODO: Implement step: When I wave");
    }

    #[test]
    fn playwright_rendering_of_core_actions() {
        assert_eq!(
            playwright_line(&ActionStatement::Navigate { path: "/login".into() }),
            "await page.goto(baseUrl + '/login');"
        );
        assert_eq!(
            playwright_line(&ActionStatement::AssertDashboardVisible),
            "await expect(page.getByText(/dashboard/i)).toBeVisible();"
        );
    }
}
