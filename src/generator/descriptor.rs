// Test descriptors and label classification. A descriptor is the unit of
// emission: one descriptor maps to exactly one output file, and its artifact
// name is a pure function of the source title or operation id, so re-running
// generation on unchanged input yields byte-stable names.

use std::path::PathBuf;

use serde_json::Value;

use crate::generator::steps::ActionStatement;

/// Recognized test-type labels, in no particular precedence beyond the
/// caller's own label order.
pub const TEST_TYPES: &[&str] = &["smoke", "regression", "functional", "e2e"];

/// Recognized layer labels.
pub const LAYERS: &[&str] = &["ui", "api", "backend", "integration"];

pub const DEFAULT_TEST_TYPE: &str = "functional";
pub const DEFAULT_LAYER: &str = "ui";

fn first_in_vocabulary(labels: &[String], vocabulary: &[&str], default: &str) -> String {
    labels
        .iter()
        .map(|label| label.to_lowercase())
        .find(|label| vocabulary.contains(&label.as_str()))
        .unwrap_or_else(|| default.to_string())
}

/// Resolves a test type from a label list: the first label (in list order)
/// found in the type vocabulary wins, else `"functional"`. Total function,
/// never fails.
pub fn resolve_test_type(labels: &[String]) -> String {
    first_in_vocabulary(labels, TEST_TYPES, DEFAULT_TEST_TYPE)
}

/// Resolves a layer from a label list, defaulting to `"ui"`.
pub fn resolve_layer(labels: &[String]) -> String {
    first_in_vocabulary(labels, LAYERS, DEFAULT_LAYER)
}

/// The test type / layer pair derived from a story's labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub test_type: String,
    pub layer: String,
}

impl Classification {
    pub fn from_labels(labels: &[String]) -> Classification {
        Classification {
            test_type: resolve_test_type(labels),
            layer: resolve_layer(labels),
        }
    }
}

/// An in-memory, framework-agnostic description of one test artifact,
/// consumed by the template renderer and the artifact sink.
#[derive(Debug, Clone)]
pub struct TestDescriptor {
    /// Stable, collision-free-by-construction artifact name (a slug)
    pub artifact_name: String,

    /// Output path relative to the output directory root
    pub relative_path: PathBuf,

    /// Identifier of the template the renderer should apply
    pub template: String,

    /// Structured key-value context handed to the renderer
    pub context: Value,

    /// Ordered framework actions derived from Gherkin steps. Empty for
    /// descriptors not driven by step text (API tests, test data).
    pub actions: Vec<ActionStatement>,

    /// Test type and layer derived from labels
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_matching_type_label_wins() {
        assert_eq!(resolve_test_type(&labels(&["ui", "smoke"])), "smoke");
        assert_eq!(resolve_test_type(&labels(&["regression", "smoke"])), "regression");
    }

    #[test]
    fn type_defaults_to_functional() {
        assert_eq!(resolve_test_type(&labels(&["ui"])), "functional");
        assert_eq!(resolve_test_type(&[]), "functional");
    }

    #[test]
    fn layer_resolution_and_default() {
        assert_eq!(resolve_layer(&labels(&["api", "regression"])), "api");
        assert_eq!(resolve_layer(&[]), "ui");
        assert_eq!(resolve_layer(&labels(&["smoke"])), "ui");
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(resolve_test_type(&labels(&["SMOKE"])), "smoke");
        assert_eq!(resolve_layer(&labels(&["Backend"])), "backend");
    }

    #[test]
    fn classification_bundles_both() {
        let c = Classification::from_labels(&labels(&["api", "e2e"]));
        assert_eq!(c.test_type, "e2e");
        assert_eq!(c.layer, "api");
    }
}
