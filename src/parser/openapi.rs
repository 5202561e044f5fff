// OpenAPI document loading and operation extraction. Documents are YAML
// (JSON parses through the same path); paths and responses are walked in
// document order and every missing field resolves through a documented
// fallback instead of an error.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::utils::slug;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;

/// The HTTP methods an operation may be generated for. Any other key in a
/// path item (summary, parameters, vendor extensions) is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn from_key(key: &str) -> Option<HttpMethod> {
        match key.to_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "patch" => Some(HttpMethod::Patch),
            "delete" => Some(HttpMethod::Delete),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }

    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Status assumed when an operation declares no responses. Note the
    /// asymmetry: post creates (201), delete returns no content (204).
    pub fn default_status(&self) -> &'static str {
        match self {
            HttpMethod::Get => "200",
            HttpMethod::Post => "201",
            HttpMethod::Put => "200",
            HttpMethod::Patch => "200",
            HttpMethod::Delete => "204",
            HttpMethod::Head => "200",
            HttpMethod::Options => "200",
        }
    }

    /// Only post/put/patch operations carry a request body.
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// Represents a query or path parameter declared on an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub name: String,
    pub required: bool,
}

/// One path+method pair extracted from an OpenAPI document
#[derive(Debug, Clone)]
pub struct ApiOperation {
    /// The path template (e.g. "/accounts/{accountId}")
    pub path: String,

    /// HTTP method of the operation
    pub method: HttpMethod,

    /// Operation ID from the spec, or "<method>_<slug(path)>" if absent
    pub operation_id: String,

    /// Summary of what the operation does
    pub summary: Option<String>,

    /// First declared response status, or the per-method default
    pub expected_status: String,

    /// JSON request body schema, populated only for post/put/patch
    pub request_body_schema: Option<Value>,

    /// Parameters declared with `in: query`
    pub query_params: Vec<ParamDescriptor>,

    /// Parameters declared with `in: path`
    pub path_params: Vec<ParamDescriptor>,
}

/// Loads an OpenAPI document from disk. YAML and JSON both parse here;
/// a malformed document is fatal for this input source only.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    parse_spec(&content)
}

/// Parses an OpenAPI document from text.
pub fn parse_spec(content: &str) -> Result<Value> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_json(yaml))
}

// YAML allows non-string mapping keys (an unquoted `200:` response status is
// an integer), so the document is converted key-by-key rather than
// deserialized straight into serde_json::Value.
fn yaml_to_json(yaml: serde_yaml::Value) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            serde_json::from_str(&n.to_string()).unwrap_or(Value::Null)
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = serde_json::Map::new();
            for (key, value) in map {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => continue,
                };
                out.insert(key, yaml_to_json(value));
            }
            Value::Object(out)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Walks the document's path map in document order and produces one
/// operation descriptor per supported path+method pair. A document without
/// a `paths` map simply yields no operations.
pub fn extract_operations(spec: &Value) -> Vec<ApiOperation> {
    let mut operations = Vec::new();

    let paths = match spec.get("paths").and_then(Value::as_object) {
        Some(paths) => paths,
        None => return operations,
    };

    for (path, path_item) in paths {
        let methods = match path_item.as_object() {
            Some(obj) => obj,
            None => continue,
        };

        for (key, op) in methods {
            let method = match HttpMethod::from_key(key) {
                Some(m) => m,
                None => continue,
            };
            let op_obj = match op.as_object() {
                Some(obj) => obj,
                None => continue,
            };

            let operation_id = op_obj
                .get("operationId")
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| format!("{}_{}", method.as_str(), slug(path)));

            let summary = op_obj
                .get("summary")
                .and_then(Value::as_str)
                .map(String::from);

            let expected_status = op_obj
                .get("responses")
                .and_then(Value::as_object)
                .and_then(|responses| responses.keys().next().cloned())
                .unwrap_or_else(|| method.default_status().to_string());

            let request_body_schema = if method.allows_body() {
                op_obj
                    .get("requestBody")
                    .and_then(|body| body.get("content"))
                    .and_then(|content| content.get("application/json"))
                    .and_then(|json| json.get("schema"))
                    .cloned()
            } else {
                None
            };

            let mut query_params = Vec::new();
            let mut path_params = Vec::new();

            if let Some(params) = op_obj.get("parameters").and_then(Value::as_array) {
                for param in params {
                    let name = param
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string();
                    let required = param
                        .get("required")
                        .and_then(Value::as_bool)
                        .unwrap_or(false);

                    let descriptor = ParamDescriptor { name, required };

                    // Parameters in any other location (header, cookie) are
                    // dropped from both partitions.
                    match param.get("in").and_then(Value::as_str) {
                        Some("query") => query_params.push(descriptor),
                        Some("path") => path_params.push(descriptor),
                        _ => {}
                    }
                }
            }

            operations.push(ApiOperation {
                path: path.clone(),
                method,
                operation_id,
                summary,
                expected_status,
                request_body_schema,
                query_params,
                path_params,
            });
        }
    }

    operations
}
