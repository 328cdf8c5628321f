use crate::index::Endpoint;
use crate::parse::Document;
use crate::parse::parameter::ParameterLocation;

use super::{placeholder_value, request_body_example, request_url, resolved_parameters};

/// Build a multi-line cURL command for the endpoint. Clause order is fixed:
/// method and URL, then header parameters in declaration order, then the
/// Content-Type and data clauses when a JSON request body exists.
pub fn curl(endpoint: &Endpoint, doc: &Document) -> String {
    let params = resolved_parameters(&endpoint.operation, doc);
    let url = request_url(endpoint, &params, doc);

    let mut out = format!("curl -X {} \"{}\"", endpoint.method.as_str(), url);

    for param in params
        .iter()
        .filter(|p| p.location == ParameterLocation::Header)
    {
        out.push_str(&format!(
            " \\\n  -H \"{}: {}\"",
            param.name,
            placeholder_value(param)
        ));
    }

    if let Some(body) = request_body_example(&endpoint.operation, doc) {
        let json = serde_json::to_string_pretty(&body).unwrap_or_default();
        out.push_str(" \\\n  -H \"Content-Type: application/json\"");
        out.push_str(&format!(" \\\n  -d '{json}'"));
    }

    out
}
