#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Helper functions to resolve schema `$ref` pointers against `components/schemas`.
//!
//! Only local pointers of the form `#/components/schemas/{name}` are understood, and
//! only one level deep: a component that is itself a `$ref` is returned as-is rather
//! than chased. Anything unresolvable yields `None`, which callers treat as
//! "no example derivable".

use crate::oas::models::{Document, Schema};

/// Prefix of every resolvable schema reference.
pub const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";

/// Resolves `schema` against the document's component table (single hop).
///
/// # Arguments
///
/// * `schema` - The reference or inline schema; `None` passes through.
/// * `document` - The document owning the component table.
pub fn resolve_schema<'a>(
    schema: Option<&'a Schema>,
    document: &'a Document,
) -> Option<&'a Schema> {
    let schema = schema?;
    if !schema.is_reference() {
        return Some(schema);
    }
    resolve_ref_name(&schema.reference, document)
}

/// Looks up a reference string in `components/schemas`.
fn resolve_ref_name<'a>(reference: &str, document: &'a Document) -> Option<&'a Schema> {
    let Some(name) = reference.strip_prefix(COMPONENT_SCHEMA_PREFIX) else {
        tracing::warn!(reference, "unsupported $ref: only local component schemas are resolved");
        return None;
    };

    let found = document
        .component_schemas()
        .and_then(|schemas| schemas.get(name));
    if found.is_none() {
        tracing::warn!(reference, "unresolved $ref: no such component schema");
    }
    found
}
