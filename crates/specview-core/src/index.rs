//! Endpoint extraction and tag grouping — the navigation index.

use crate::parse::Document;
use crate::parse::operation::{Operation, PathItem};
use crate::parse::spec::Tag;

/// An HTTP method surfaced in navigation. `trace` operations are parsed
/// but not indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Case-insensitive lookup, for user-supplied method names.
    pub fn parse(s: &str) -> Option<HttpMethod> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            _ => None,
        }
    }
}

/// A (path, method, operation) triple — the unit of navigation and the
/// unit passed to the synthesizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    pub operation: Operation,
}

/// A tag paired with every endpoint listing that tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TagGroup {
    pub tag: Tag,
    pub endpoints: Vec<Endpoint>,
}

fn navigable_operations(item: &PathItem) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    [
        (HttpMethod::Get, item.get.as_ref()),
        (HttpMethod::Post, item.post.as_ref()),
        (HttpMethod::Put, item.put.as_ref()),
        (HttpMethod::Delete, item.delete.as_ref()),
        (HttpMethod::Patch, item.patch.as_ref()),
        (HttpMethod::Options, item.options.as_ref()),
        (HttpMethod::Head, item.head.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, op)| op.map(|op| (method, op)))
}

/// Every documented endpoint, in path-table order.
pub fn endpoints(doc: &Document) -> Vec<Endpoint> {
    let mut all = Vec::new();
    for (path, item) in &doc.spec.paths {
        for (method, op) in navigable_operations(item) {
            all.push(Endpoint {
                path: path.clone(),
                method,
                operation: op.clone(),
            });
        }
    }
    all
}

/// Group endpoints by declared tag, in declared order. An endpoint listing
/// several tags appears under each of them; endpoints with no tags collect
/// into a synthetic "Untagged" group appended last. Empty groups are
/// dropped. Total function: a document with no paths yields an empty vec.
pub fn index(doc: &Document) -> Vec<TagGroup> {
    let all = endpoints(doc);

    let mut groups: Vec<TagGroup> = doc
        .spec
        .tags
        .iter()
        .map(|tag| TagGroup {
            tag: tag.clone(),
            endpoints: all
                .iter()
                .filter(|ep| ep.operation.tags.iter().any(|t| t == &tag.name))
                .cloned()
                .collect(),
        })
        .collect();

    let untagged: Vec<Endpoint> = all
        .iter()
        .filter(|ep| ep.operation.tags.is_empty())
        .cloned()
        .collect();
    if !untagged.is_empty() {
        groups.push(TagGroup {
            tag: Tag {
                name: "Untagged".to_string(),
                description: Some("Endpoints without a tag".to_string()),
            },
            endpoints: untagged,
        });
    }

    groups.retain(|group| !group.endpoints.is_empty());
    groups
}
