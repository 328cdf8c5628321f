use crate::index::Endpoint;
use crate::parse::Document;

use super::{request_body_example, request_url, resolved_parameters};

/// Build a JavaScript `fetch` snippet for the endpoint: method, a default
/// content type, a placeholder auth header, and a serialized body when the
/// endpoint takes a JSON request body. Parameter substitution follows the
/// same rules as the cURL contract.
pub fn fetch_snippet(endpoint: &Endpoint, doc: &Document) -> String {
    let params = resolved_parameters(&endpoint.operation, doc);
    let url = request_url(endpoint, &params, doc);

    let mut out = format!("fetch(\"{url}\", {{\n");
    out.push_str(&format!("  method: \"{}\",\n", endpoint.method.as_str()));
    out.push_str("  headers: {\n");
    out.push_str("    \"Content-Type\": \"application/json\",\n");
    out.push_str("    \"Authorization\": \"Bearer YOUR_API_KEY\"\n");
    out.push_str("  }");

    if let Some(body) = request_body_example(&endpoint.operation, doc) {
        let json = serde_json::to_string(&body).unwrap_or_default();
        out.push_str(&format!(",\n  body: JSON.stringify({json})"));
    }

    out.push_str("\n})\n");
    out.push_str("  .then(res => res.json())\n");
    out.push_str("  .then(json => console.log(json))");
    out
}
