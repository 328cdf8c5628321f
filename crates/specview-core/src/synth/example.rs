use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value, json};

use crate::parse::Document;
use crate::parse::schema::SchemaOrRef;
use crate::resolve::resolve_as;

/// Synthesize a representative value for a schema.
///
/// An explicit `example` wins at every recursion level. References are
/// resolved against the document; an unresolvable reference yields `null`.
/// Objects map each declared property to its synthesized example, arrays
/// produce a single synthesized element, and primitives come from a fixed
/// deterministic table (only `date-time` varies between calls).
pub fn example_of(schema: &SchemaOrRef, doc: &Document) -> Value {
    synthesize(schema, doc, &mut HashSet::new())
}

fn synthesize(schema: &SchemaOrRef, doc: &Document, active: &mut HashSet<String>) -> Value {
    match schema {
        SchemaOrRef::Ref { ref_path } => {
            if !active.insert(ref_path.clone()) {
                // Reference cycle: break with null instead of recursing.
                return Value::Null;
            }
            let value = match resolve_as::<SchemaOrRef>(doc, ref_path) {
                Some(target) => synthesize(&target, doc, active),
                None => Value::Null,
            };
            active.remove(ref_path);
            value
        }
        SchemaOrRef::Schema(schema) => {
            if let Some(example) = &schema.example {
                return example.clone();
            }
            match schema.schema_type.as_deref() {
                Some("object") => {
                    let mut map = Map::new();
                    for (name, prop) in &schema.properties {
                        map.insert(name.clone(), synthesize(prop, doc, active));
                    }
                    Value::Object(map)
                }
                Some("array") => match &schema.items {
                    Some(items) => Value::Array(vec![synthesize(items, doc, active)]),
                    None => Value::Array(Vec::new()),
                },
                other => primitive_example(other, schema.format.as_deref()),
            }
        }
    }
}

fn primitive_example(schema_type: Option<&str>, format: Option<&str>) -> Value {
    match schema_type {
        Some("string") => match format {
            Some("date-time") => {
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Some("email") => Value::String("user@example.com".to_string()),
            _ => Value::String("string".to_string()),
        },
        Some("number") => json!(123.45),
        Some("integer") => json!(123),
        Some("boolean") => Value::Bool(true),
        _ => Value::String("unknown".to_string()),
    }
}
