pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod server;
pub mod spec;

use log::debug;
use serde_json::Value;

use crate::error::ParseError;
use spec::OpenApiSpec;

/// A loaded OpenAPI document: the typed spec plus the raw value tree it was
/// deserialized from. The raw tree is the substrate for `$ref` resolution,
/// which walks arbitrary pointer segments the typed view cannot express.
///
/// Immutable once constructed; a re-upload replaces the whole document.
#[derive(Debug, Clone)]
pub struct Document {
    pub spec: OpenApiSpec,
    raw: Value,
}

impl Document {
    /// Build a document from an already-parsed raw tree.
    pub fn from_raw(raw: Value) -> Result<Document, ParseError> {
        validate_shape(&raw)?;
        let spec: OpenApiSpec = serde_json::from_value(raw.clone())?;
        debug!(
            "loaded document '{}' with {} paths",
            spec.info.title,
            spec.paths.len()
        );
        Ok(Document { spec, raw })
    }

    /// The raw value tree, for pointer resolution.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    let yaml: serde_yaml_ng::Value = serde_yaml_ng::from_str(input)?;
    // Round-trip through serde_json so numeric mapping keys (unquoted
    // status codes) become strings.
    let raw = serde_json::to_value(yaml)?;
    Document::from_raw(raw)
}

/// Parse an OpenAPI document from strict JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    let raw: Value = serde_json::from_str(input)?;
    Document::from_raw(raw)
}

/// Minimal structural check before the document is accepted: a non-empty
/// `openapi` version string, an `info` mapping, and a `paths` mapping.
/// Anything failing this never reaches the indexer or synthesizer.
fn validate_shape(raw: &Value) -> Result<(), ParseError> {
    let root = raw
        .as_object()
        .ok_or_else(|| ParseError::Invalid("document root is not a mapping".to_string()))?;

    match root.get("openapi").and_then(Value::as_str) {
        Some(version) if !version.is_empty() => {}
        _ => return Err(ParseError::MissingField("openapi")),
    }
    if !root.get("info").is_some_and(Value::is_object) {
        return Err(ParseError::MissingField("info"));
    }
    if !root.get("paths").is_some_and(Value::is_object) {
        return Err(ParseError::MissingField("paths"));
    }
    Ok(())
}
