#![deny(missing_docs)]

//! # Body Resolution
//!
//! Picks the request content type and synthesizes a JSON body for an operation.
//! OAS 3.x reads `requestBody.content`; Swagger 2.0 reads `consumes` and the
//! `in: body` parameter.

use crate::example::example_for_schema;
use crate::oas::{Dialect, Document, Operation, ParamLocation, Schema};

/// Content type used when the operation declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Content type to announce for an operation's request.
///
/// 3.x prefers `application/json` among the declared media types, then the first one
/// in document order. 2.0 uses the first `consumes` entry.
pub fn content_type<'a>(op: &'a Operation, document: &Document) -> &'a str {
    let declared = match document.dialect() {
        Dialect::OpenApi3 => op.request_body.as_ref().and_then(|body| {
            if body.content.contains_key(DEFAULT_CONTENT_TYPE) {
                Some(DEFAULT_CONTENT_TYPE)
            } else {
                body.content.keys().next().map(String::as_str)
            }
        }),
        Dialect::Swagger2 => op.consumes.first().map(String::as_str),
    };
    declared.unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// The schema describing the request payload, if any.
fn body_schema<'a>(op: &'a Operation, document: &Document) -> Option<&'a Schema> {
    match document.dialect() {
        Dialect::OpenApi3 => op
            .request_body
            .as_ref()?
            .content
            .values()
            .find_map(|media| media.schema.as_ref()),
        Dialect::Swagger2 => op
            .parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Body)
            .find_map(|p| p.schema.as_ref()),
    }
}

/// Synthesized body text, indented with two spaces.
///
/// Empty when there is no payload schema or nothing could be derived from it
/// (unresolvable `$ref`, unknown type).
pub fn request_body(op: &Operation, document: &Document) -> String {
    let Some(schema) = body_schema(op, document) else {
        return String::new();
    };

    let example = example_for_schema(Some(schema), document);
    if example.is_null() {
        return String::new();
    }
    serde_json::to_string_pretty(&example).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to encode synthesized body");
        "{}".to_string()
    })
}
