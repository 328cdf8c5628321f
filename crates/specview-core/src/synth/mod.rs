//! Example and snippet synthesis.
//!
//! None of these functions return `Result`: an unresolvable reference or a
//! missing schema degrades to a placeholder or an omitted clause, because
//! partial documentation is preferable to none.

pub mod curl;
pub mod example;
pub mod fetch;

pub use curl::curl;
pub use example::example_of;
pub use fetch::fetch_snippet;

use serde_json::Value;

use crate::index::Endpoint;
use crate::parse::Document;
use crate::parse::operation::Operation;
use crate::parse::parameter::{Parameter, ParameterLocation, ParameterOrRef};
use crate::parse::request_body::{RequestBody, RequestBodyOrRef};
use crate::resolve::resolve_as;

/// The operation's parameters with references resolved, in declaration
/// order. Parameters whose reference target is missing are dropped.
pub fn resolved_parameters(operation: &Operation, doc: &Document) -> Vec<Parameter> {
    operation
        .parameters
        .iter()
        .filter_map(|p| match p {
            ParameterOrRef::Parameter(param) => Some(param.clone()),
            ParameterOrRef::Ref { ref_path } => resolve_as(doc, ref_path),
        })
        .collect()
}

/// The synthesized example for the endpoint's JSON request body, if it has
/// one. An explicit media-type example wins over schema synthesis.
pub fn request_body_example(operation: &Operation, doc: &Document) -> Option<Value> {
    let body: RequestBody = match operation.request_body.as_ref()? {
        RequestBodyOrRef::RequestBody(rb) => rb.clone(),
        RequestBodyOrRef::Ref { ref_path } => resolve_as(doc, ref_path)?,
    };
    let media = body.content.get("application/json")?;
    if let Some(example) = &media.example {
        return Some(example.clone());
    }
    let schema = media.schema.as_ref()?;
    Some(example_of(schema, doc))
}

/// The full request URL: first server URL plus the path template with a
/// single trailing slash stripped, path placeholders substituted, and a
/// query string appended when query parameters exist.
pub fn request_url(endpoint: &Endpoint, params: &[Parameter], doc: &Document) -> String {
    let server = doc
        .spec
        .servers
        .first()
        .map(|s| s.url.as_str())
        .unwrap_or("");
    let mut url = format!("{server}{}", endpoint.path);
    if url.ends_with('/') {
        url.pop();
    }

    for param in params
        .iter()
        .filter(|p| p.location == ParameterLocation::Path)
    {
        url = url.replace(&format!("{{{}}}", param.name), &placeholder_value(param));
    }

    let query: Vec<String> = params
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
        .map(|p| format!("{}={}", p.name, placeholder_value(p)))
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    url
}

/// The substitution value for one parameter: its explicit example when
/// present, otherwise a bracketed uppercase placeholder like `[NAME]`.
pub(crate) fn placeholder_value(param: &Parameter) -> String {
    match &param.example {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => format!("[{}]", param.name.to_uppercase()),
    }
}
