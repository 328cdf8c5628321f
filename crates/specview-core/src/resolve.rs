//! Intra-document `$ref` resolution.
//!
//! A pointer of the form `#/segment/segment/...` is walked segment-by-segment
//! from the raw document root. Only internal pointers are supported; anything
//! not starting with `#/` is unresolvable. JSON-Pointer escaping (`~0`/`~1`)
//! is not handled — component names are plain identifiers in practice.

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::parse::Document;

/// Follow a pointer to the node it addresses, or `None` if any segment is
/// missing or the pointer is not an internal reference. Pure lookup, no
/// caching; the caller interprets the node's shape.
pub fn resolve<'a>(doc: &'a Document, pointer: &str) -> Option<&'a Value> {
    let rest = pointer.strip_prefix("#/")?;
    let mut node = doc.raw();
    for segment in rest.split('/') {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// Resolve a pointer and deserialize the target into `T`. A target of an
/// unexpected shape degrades to `None` rather than failing, so one bad
/// pointer never blocks viewing the rest of the document.
pub fn resolve_as<T: DeserializeOwned>(doc: &Document, pointer: &str) -> Option<T> {
    let node = resolve(doc, pointer)?;
    match serde_json::from_value(node.clone()) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("reference {pointer} resolved to an unexpected shape: {err}");
            None
        }
    }
}
