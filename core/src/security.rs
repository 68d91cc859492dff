#![deny(missing_docs)]

//! # Security Headers
//!
//! Maps the effective security requirements of an operation onto placeholder
//! headers. Values are kulala variables (`{{token}}`, `{{api_key}}`, ...) so that
//! credentials never end up in the generated files.

use crate::oas::{Document, Operation, SecurityRequirement, SecurityScheme, SecuritySchemeType};
use indexmap::IndexMap;

/// Requirements in force for `op`: its own list when non-empty, else the document default.
pub fn effective_requirements<'a>(
    op: &'a Operation,
    document: &'a Document,
) -> &'a [SecurityRequirement] {
    if op.security.is_empty() {
        &document.security
    } else {
        &op.security
    }
}

/// Header line for one scheme, or `None` when the scheme cannot be expressed as a header.
pub fn header_for_scheme(scheme: &SecurityScheme) -> Option<String> {
    match scheme.scheme_type {
        SecuritySchemeType::ApiKey if scheme.location == "header" => {
            Some(format!("{}: {{{{api_key}}}}", scheme.name))
        }
        SecuritySchemeType::Http if scheme.scheme.eq_ignore_ascii_case("bearer") => {
            Some("Authorization: Bearer {{token}}".to_string())
        }
        SecuritySchemeType::Http if scheme.scheme.eq_ignore_ascii_case("basic") => {
            Some("Authorization: Basic {{base64_credentials}}".to_string())
        }
        SecuritySchemeType::OAuth2 | SecuritySchemeType::OpenIdConnect => {
            Some("Authorization: Bearer {{access_token}}".to_string())
        }
        _ => None,
    }
}

/// Security headers for an operation, in requirement order.
///
/// Unknown scheme names are skipped. Redundant requirements are not deduplicated.
pub fn security_headers(
    op: &Operation,
    document: &Document,
    schemes: &IndexMap<String, SecurityScheme>,
) -> Vec<String> {
    let mut headers = Vec::new();
    for requirement in effective_requirements(op, document) {
        for name in requirement.keys() {
            let Some(scheme) = schemes.get(name) else {
                tracing::debug!(scheme = %name, "security requirement names an unknown scheme");
                continue;
            };
            headers.extend(header_for_scheme(scheme));
        }
    }
    headers
}
