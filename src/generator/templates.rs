// Built-in template renderer. Each supported template identifier maps to a
// format!-driven source builder; the engine itself only ever sees the
// (template, context) boundary, so this renderer is swappable.

use serde_json::Value;

use crate::generator::emit::{GeneratorError, Result, TemplateRenderer};

/// Renderer for the built-in playwright / restassured / playwright_api /
/// test-data template families.
pub struct BuiltinTemplates {
    base_url: String,
}

impl BuiltinTemplates {
    pub fn new(base_url: &str) -> BuiltinTemplates {
        BuiltinTemplates { base_url: base_url.to_string() }
    }
}

impl TemplateRenderer for BuiltinTemplates {
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        match template {
            "playwright/spec.spec.ts" => Ok(render_playwright_spec(context, &self.base_url)),
            "playwright_api/api.spec.ts" => Ok(render_playwright_api(context, &self.base_url)),
            "restassured/OperationTest.java" => Ok(render_restassured(context)),
            "data/test_data.json" => render_test_data(context),
            other => Err(GeneratorError::TemplateError(format!(
                "unknown template: {}",
                other
            ))),
        }
    }
}

fn str_field<'a>(context: &'a Value, key: &str) -> &'a str {
    context.get(key).and_then(Value::as_str).unwrap_or("")
}

fn str_list(context: &Value, key: &str) -> Vec<String> {
    context
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

// Declared statuses like "default" or "2XX" are not numeric; generated
// assertions fall back to 200 for those.
fn status_code(context: &Value) -> u16 {
    str_field(context, "expected_status").parse().unwrap_or(200)
}

fn render_playwright_spec(context: &Value, base_url: &str) -> String {
    let name = str_field(context, "name");
    let test_type = str_field(context, "test_type");
    let layer = str_field(context, "layer");
    let labels = str_list(context, "labels").join(", ");
    let base_url_var = str_field(context, "base_url_var");

    let steps = str_list(context, "steps")
        .iter()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"import {{ test, expect }} from '@playwright/test';

// labels: [{labels}] | type: {test_type} | layer: {layer}
const baseUrl = {base_url_var} || '{base_url}';

test.describe('{name}', () => {{
  test('{name}', async ({{ page }}) => {{
{steps}
  }});
}});
"#
    )
}

fn render_playwright_api(context: &Value, base_url: &str) -> String {
    let test_name = str_field(context, "test_name");
    let method = str_field(context, "method");
    let path = str_field(context, "path");
    let summary = str_field(context, "summary");
    let status = status_code(context);

    let summary_comment = if summary.is_empty() {
        String::new()
    } else {
        format!("// {}\n", summary)
    };

    format!(
        r#"import {{ test, expect }} from '@playwright/test';

const baseURL = process.env.BASE_URL || '{base_url}';

{summary_comment}test('{test_name}', async ({{ request }}) => {{
  const response = await request.fetch(baseURL + '{path}', {{ method: '{method}' }});
  expect(response.status()).toBe({status});
}});
"#
    )
}

fn render_restassured(context: &Value) -> String {
    let class_name = str_field(context, "class_name");
    let method = str_field(context, "method");
    let path = str_field(context, "path");
    let operation_id = str_field(context, "operation_id");
    let summary = str_field(context, "summary");
    let status = status_code(context);

    let display_name = if summary.is_empty() { operation_id } else { summary };

    let mut given_chain = String::from("        given()\n            .spec(requestSpec)");

    for param in str_list(context, "path_params") {
        given_chain.push_str(&format!(
            "\n            .pathParam(\"{}\", \"test_{}\")",
            param, param
        ));
    }

    for param in str_list(context, "query_params") {
        given_chain.push_str(&format!(
            "\n            .queryParam(\"{}\", \"test_value\")",
            param
        ));
    }

    if context.get("has_body").and_then(Value::as_bool).unwrap_or(false) {
        let body = context
            .get("body_sample")
            .filter(|v| !v.is_null())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "{}".to_string());
        given_chain.push_str(&format!("\n            .body(\"{}\")", escape_java(&body)));
    }

    format!(
        r#"package com.generated.api.specs;

import com.generated.api.base.ApiTest;
import io.qameta.allure.Description;
import io.qameta.allure.Epic;
import io.qameta.allure.Feature;
import io.qameta.allure.Story;
import org.junit.jupiter.api.DisplayName;
import org.junit.jupiter.api.Test;

import static io.restassured.RestAssured.given;
import static org.hamcrest.Matchers.*;

@Epic("Generated API")
@Feature("{operation_id}")
public class {class_name} extends ApiTest {{

    @Test
    @DisplayName("{display_name}")
    @Description("Test {method} {path} endpoint")
    @Story("{operation_id}")
    void test{class_name}() {{
{given_chain}
        .when()
            .request("{method}", "{path}")
        .then()
            .statusCode({status});
    }}
}}
"#
    )
}

fn escape_java(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn render_test_data(context: &Value) -> Result<String> {
    let data = context.get("data").cloned().unwrap_or(Value::Null);
    serde_json::to_string_pretty(&data)
        .map_err(|e| GeneratorError::TemplateError(e.to_string()))
}
