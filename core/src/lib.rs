#![deny(missing_docs)]

//! # swagger2http Core
//!
//! Converts OpenAPI 3.x and Swagger 2.0 documents into plaintext HTTP request files
//! (the `.http` format used by kulala.nvim and similar editor clients).
//!
//! Pipeline: YAML -> [`oas::Document`] -> [`target::ResolvedTarget`] ->
//! [`render::RequestRenderer`] per operation -> [`output::GeneratedFile`]s.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) document model and parsing.
pub mod oas;

/// Base URL and security table resolution.
pub mod target;

/// Example value synthesis.
pub mod example;

/// Security header synthesis.
pub mod security;

/// Content type and request body resolution.
pub mod body;

/// Per-operation request rendering.
pub mod render;

/// Combined / per-tag output assembly.
pub mod output;

pub use error::{AppError, AppResult};
pub use example::{example_for_parameter, example_for_schema};
pub use oas::{parse_document, Dialect, Document};
pub use output::{convert, Converter, GeneratedFile, OutputMode};
pub use render::RequestRenderer;
pub use target::ResolvedTarget;

/// Parses `yaml_content` and converts it in one step.
pub fn convert_yaml(yaml_content: &str, mode: OutputMode) -> AppResult<Vec<GeneratedFile>> {
    let document = parse_document(yaml_content)?;
    Ok(convert(&document, mode))
}
