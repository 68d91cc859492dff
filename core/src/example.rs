#![deny(missing_docs)]

//! # Example Synthesis
//!
//! Produces representative values for parameters (as strings, for URLs and headers)
//! and for schemas (as structured JSON, for request bodies).
//!
//! Precedence is always: explicit `example` > explicit `default` > type/format synthesis.
//! Both entry points are deterministic; the only literal dates are fixed constants.

use crate::oas::{resolve_schema, Document, Parameter, Schema};
use serde_json::{json, Map, Value};

/// Nesting limit for [`example_for_schema`]; deeper levels synthesize `null`.
///
/// Self-referential schemas (`Node.children.items -> Node`) would otherwise recurse
/// without bound.
pub const MAX_SCHEMA_DEPTH: usize = 16;

/// Fallback for parameters whose type yields nothing better.
const PARAM_FALLBACK: &str = "value";
/// Fallback for string schemas in bodies.
const SCHEMA_STRING_FALLBACK: &str = "string";

/// Example value for a well-known string `format`.
fn format_example(format: &str) -> Option<&'static str> {
    match format {
        "date" => Some("2024-01-01"),
        "date-time" => Some("2024-01-01T00:00:00Z"),
        "email" => Some("user@example.com"),
        "uuid" => Some("123e4567-e89b-12d3-a456-426614174000"),
        _ => None,
    }
}

/// Renders a JSON value the way it should appear inside a URL or header.
///
/// Strings are emitted without quotes, whole floats drop their fraction (`3.0` -> `3`),
/// `null` is empty and containers fall back to compact JSON.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Example string for a parameter.
///
/// The type comes from the parameter's schema when one is present, otherwise from the
/// parameter's own (Swagger 2.0) `type`. Format and enum hints are only read from a schema.
pub fn example_for_parameter(param: &Parameter) -> String {
    if let Some(example) = &param.example {
        return stringify_value(example);
    }
    if let Some(default) = &param.default {
        return stringify_value(default);
    }

    let param_type = match &param.schema {
        Some(schema) => schema.schema_type.first(),
        None => param.param_type.first(),
    };

    match param_type {
        "integer" => "0".to_string(),
        "number" => "0.0".to_string(),
        "boolean" => "true".to_string(),
        "string" => param
            .schema
            .as_ref()
            .and_then(string_hint)
            .unwrap_or_else(|| PARAM_FALLBACK.to_string()),
        _ => PARAM_FALLBACK.to_string(),
    }
}

/// Format or first-enum hint for a string schema, stringified.
fn string_hint(schema: &Schema) -> Option<String> {
    format_example(&schema.format)
        .map(str::to_string)
        .or_else(|| schema.enum_values.first().map(stringify_value))
}

/// Structured example for a schema, resolving a top-level `$ref` first.
///
/// Returns `Value::Null` when the schema is absent, unresolvable or of unknown type.
pub fn example_for_schema(schema: Option<&Schema>, document: &Document) -> Value {
    example_at_depth(schema, document, 0)
}

fn example_at_depth(schema: Option<&Schema>, document: &Document, depth: usize) -> Value {
    if depth > MAX_SCHEMA_DEPTH {
        tracing::debug!(depth, "schema nesting limit reached; emitting null");
        return Value::Null;
    }

    let Some(schema) = resolve_schema(schema, document) else {
        return Value::Null;
    };

    if let Some(example) = &schema.example {
        return example.clone();
    }

    match schema.schema_type.first() {
        "string" => match format_example(&schema.format) {
            Some(s) => json!(s),
            None => schema
                .enum_values
                .first()
                .cloned()
                .unwrap_or_else(|| json!(SCHEMA_STRING_FALLBACK)),
        },
        "integer" => json!(0),
        "number" => json!(0.0),
        "boolean" => json!(true),
        "array" => match schema.items.as_deref() {
            Some(items) => Value::Array(vec![example_at_depth(Some(items), document, depth + 1)]),
            None => Value::Array(Vec::new()),
        },
        "object" => {
            let obj: Map<String, Value> = schema
                .properties
                .iter()
                .map(|(name, prop)| {
                    (name.clone(), example_at_depth(Some(prop), document, depth + 1))
                })
                .collect();
            Value::Object(obj)
        }
        _ => Value::Null,
    }
}
