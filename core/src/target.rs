#![deny(missing_docs)]

//! # Target Resolution
//!
//! Derives the single effective base URL and security-scheme table from the
//! dialect-specific top-level fields. Computed once per conversion.

use crate::oas::{Dialect, Document, SecurityScheme};
use indexmap::IndexMap;

/// Base URL used by 3.x documents without `servers`.
pub const FALLBACK_BASE_URL: &str = "http://localhost";

const FALLBACK_SCHEME: &str = "https";
const FALLBACK_HOST: &str = "localhost";

/// Where requests are sent and which security schemes they may reference.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTarget {
    /// Effective base URL, bound to `@baseUrl` in the output.
    pub base_url: String,
    /// Security schemes keyed by name.
    pub security: IndexMap<String, SecurityScheme>,
}

impl ResolvedTarget {
    /// Resolves the target for `document`. Never fails: every field defaults.
    pub fn resolve(document: &Document) -> Self {
        let base_url = match document.dialect() {
            Dialect::OpenApi3 => document
                .servers
                .first()
                .map(|s| s.url.clone())
                .unwrap_or_else(|| FALLBACK_BASE_URL.to_string()),
            Dialect::Swagger2 => {
                let scheme = document
                    .schemes
                    .first()
                    .map(String::as_str)
                    .unwrap_or(FALLBACK_SCHEME);
                let host = if document.host.is_empty() {
                    FALLBACK_HOST
                } else {
                    document.host.as_str()
                };
                format!("{}://{}{}", scheme, host, document.base_path)
            }
        };

        Self {
            base_url,
            security: document.security_schemes(),
        }
    }
}
