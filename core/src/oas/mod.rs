#![deny(missing_docs)]

//! # OpenAPI Parsing Module
//!
//! - **models**: The version-agnostic document model.
//! - **string_or_array**: Lenient decoding for scalar-or-list fields.
//! - **document**: YAML parsing and dialect detection.
//! - **refs**: Single-hop `$ref` resolution.

pub mod document;
pub mod models;
pub mod refs;
pub mod string_or_array;

pub use document::{parse_document, Dialect};
pub use models::{
    Components, Document, HttpMethod, Info, MediaType, Operation, ParamLocation, Parameter,
    PathItem, RequestBody, Schema, SecurityRequirement, SecurityScheme, SecuritySchemeType,
    Server,
};
pub use refs::resolve_schema;
pub use string_or_array::StringOrArray;
