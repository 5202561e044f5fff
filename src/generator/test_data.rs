// Schema sample generation: representative instances for object schemas,
// used for request bodies and standalone test-data files. Intentionally
// simplistic — formats, enums, bounds, references and nested shapes are out
// of scope and skipped per-property.

use serde_json::{json, Map, Value};

use crate::generator::descriptor::{Classification, TestDescriptor};

/// Produces a representative instance for an object schema, one entry per
/// declared property. Non-object schemas yield an empty mapping; properties
/// of unsupported shape are skipped silently rather than erroring.
pub fn sample_for(schema: &Value) -> Map<String, Value> {
    let mut sample = Map::new();

    if schema.get("type").and_then(Value::as_str) != Some("object") {
        return sample;
    }

    let properties = match schema.get("properties").and_then(Value::as_object) {
        Some(props) => props,
        None => return sample,
    };

    for (name, prop_schema) in properties {
        let prop_type = prop_schema
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("string");

        let value = match prop_type {
            "string" => Some(sample_string(name)),
            "integer" => Some(json!(123)),
            "number" => Some(json!(123.45)),
            "boolean" => Some(json!(true)),
            "array" => Some(json!([])),
            _ => None,
        };

        if let Some(value) = value {
            sample.insert(name.clone(), value);
        }
    }

    sample
}

// Name-based heuristics for common semantic string fields.
fn sample_string(name: &str) -> Value {
    let lower = name.to_lowercase();
    if lower.contains("email") {
        json!("test@example.com")
    } else if lower.contains("password") {
        json!("password123")
    } else if lower.contains("name") {
        json!("Test User")
    } else {
        json!(format!("test_{}", name))
    }
}

/// Builds one test-data descriptor per object schema under
/// `components.schemas`, each emitted as a JSON file under `data/`.
pub fn test_data_descriptors(spec: &Value) -> Vec<TestDescriptor> {
    let mut descriptors = Vec::new();

    let schemas = match spec
        .get("components")
        .and_then(|c| c.get("schemas"))
        .and_then(Value::as_object)
    {
        Some(schemas) => schemas,
        None => return descriptors,
    };

    for (name, schema) in schemas {
        let sample = sample_for(schema);
        if sample.is_empty() {
            continue;
        }

        let artifact_name = name.to_lowercase();
        descriptors.push(TestDescriptor {
            relative_path: format!("data/{}_test_data.json", artifact_name).into(),
            template: "data/test_data.json".to_string(),
            context: json!({ "data": Value::Object(sample) }),
            actions: Vec::new(),
            classification: Classification::from_labels(&[]),
            artifact_name,
        });
    }

    descriptors
}
