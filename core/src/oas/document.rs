#![deny(missing_docs)]

//! # OpenAPI Document Parsing
//!
//! Turns YAML text into a [`Document`] and classifies its dialect.

use crate::error::{AppError, AppResult};
use crate::oas::models::{Document, Schema, SecurityScheme};
use indexmap::IndexMap;

/// Which of the two supported document shapes is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// OpenAPI 3.x: `servers`, `components`, `requestBody`.
    OpenApi3,
    /// Swagger 2.0: `host`/`basePath`/`schemes`, `securityDefinitions`, `consumes`, body parameters.
    Swagger2,
}

impl Document {
    /// Classifies the document. A non-empty `openapi` marker wins; anything else is 2.0.
    pub fn dialect(&self) -> Dialect {
        if self.openapi.is_empty() {
            Dialect::Swagger2
        } else {
            Dialect::OpenApi3
        }
    }

    /// Named component schemas, `None` when `components` is absent.
    pub fn component_schemas(&self) -> Option<&IndexMap<String, Schema>> {
        self.components.as_ref().map(|c| &c.schemas)
    }

    /// The security scheme table authoritative for this dialect.
    pub fn security_schemes(&self) -> IndexMap<String, SecurityScheme> {
        match self.dialect() {
            Dialect::OpenApi3 => self
                .components
                .as_ref()
                .map(|c| c.security_schemes.clone())
                .unwrap_or_default(),
            Dialect::Swagger2 => self.security_definitions.clone().unwrap_or_default(),
        }
    }
}

/// Parses an OpenAPI 3.x or Swagger 2.0 YAML document.
///
/// JSON input is accepted too, since JSON is a subset of YAML.
pub fn parse_document(yaml_content: &str) -> AppResult<Document> {
    let document: Document = serde_yaml::from_str(yaml_content)
        .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI YAML: {}", e)))?;

    match document.dialect() {
        Dialect::OpenApi3 => {
            tracing::debug!(version = %document.openapi, "detected OpenAPI 3.x document")
        }
        Dialect::Swagger2 if document.swagger.is_empty() => {
            tracing::warn!("document declares neither `openapi` nor `swagger`; treating as Swagger 2.0")
        }
        Dialect::Swagger2 => {
            tracing::debug!(version = %document.swagger, "detected Swagger 2.0 document")
        }
    }

    Ok(document)
}
