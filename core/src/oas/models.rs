#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! A version-agnostic superset of the OpenAPI 3.x and Swagger 2.0 document shapes.
//!
//! These structs map directly to YAML objects. Every field is optional on the wire;
//! which sibling fields are authoritative depends on the [`Dialect`](crate::oas::document::Dialect)
//! the document declares. Maps use `IndexMap` so that document order survives parsing.

use crate::oas::string_or_array::StringOrArray;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A security requirement: scheme name -> scopes. Scopes are carried but unused.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Root of a parsed OpenAPI / Swagger document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    /// OpenAPI version (e.g. "3.0.3"). Non-empty selects the 3.x dialect.
    pub openapi: String,

    /// Swagger version (e.g. "2.0") for legacy documents.
    pub swagger: String,

    /// Metadata about the API.
    pub info: Info,

    /// Server configuration (OAS 3.x).
    pub servers: Vec<Server>,

    /// Host name, optionally with port (Swagger 2.0).
    pub host: String,

    /// Base path (Swagger 2.0), prepended to every path.
    #[serde(rename = "basePath")]
    pub base_path: String,

    /// Transfer protocols (Swagger 2.0).
    pub schemes: Vec<String>,

    /// Path items keyed by path template.
    pub paths: IndexMap<String, PathItem>,

    /// Reusable definitions (OAS 3.x).
    pub components: Option<Components>,

    /// Security Definitions (Swagger 2.0).
    #[serde(rename = "securityDefinitions")]
    pub security_definitions: Option<IndexMap<String, SecurityScheme>>,

    /// Document-wide default security requirements.
    pub security: Vec<SecurityRequirement>,
}

/// The `info` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version. Bare scalars such as `1.10` keep their source text.
    pub version: String,
    /// Free-form description.
    pub description: String,
}

/// An entry of the 3.x `servers` list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Server {
    /// Server URL.
    pub url: String,
    /// Server description.
    pub description: String,
}

/// HTTP methods an operation can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
}

impl HttpMethod {
    /// Upper-case method name as written on the request line.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Whether requests with this method get a `Content-Type` header and a body.
    pub fn carries_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations available on one path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathItem {
    /// GET operation.
    pub get: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
}

impl PathItem {
    /// Present operations, in the fixed order GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Patch, &self.patch),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Head, &self.head),
            (HttpMethod::Options, &self.options),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

/// A single HTTP operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Operation {
    /// Short summary.
    pub summary: String,
    /// Longer description.
    pub description: String,
    /// Unique operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: String,
    /// Tags; the first one is the grouping key.
    pub tags: Vec<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Request body (OAS 3.x).
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBody>,
    /// Operation-level security; overrides the document default when non-empty.
    pub security: Vec<SecurityRequirement>,
    /// Consumed media types (Swagger 2.0).
    pub consumes: Vec<String>,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// `{name}` placeholder in the path template.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Request body (Swagger 2.0 only).
    Body,
    /// Cookie; not rendered.
    Cookie,
    /// Anything else, including a missing `in`.
    #[default]
    #[serde(other)]
    Other,
}

/// An operation parameter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Required flag.
    pub required: bool,
    /// Description.
    pub description: String,
    /// Schema (3.x parameters, 2.0 body parameters).
    pub schema: Option<Schema>,
    /// Inline type (2.0 non-body parameters).
    #[serde(rename = "type")]
    pub param_type: StringOrArray,
    /// Explicit example value.
    pub example: Option<Value>,
    /// Explicit default value.
    pub default: Option<Value>,
}

/// An OAS 3.x request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    /// Description.
    pub description: String,
    /// Required flag.
    pub required: bool,
    /// Media type -> content, in document order.
    pub content: IndexMap<String, MediaType>,
}

/// A media type entry of a request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaType {
    /// Payload schema.
    pub schema: Option<Schema>,
    /// Media-level example.
    pub example: Option<Value>,
}

/// A (possibly referenced) type description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Declared type(s).
    #[serde(rename = "type")]
    pub schema_type: StringOrArray,
    /// Format hint (`date`, `uuid`, ...).
    pub format: String,
    /// Object properties.
    pub properties: IndexMap<String, Schema>,
    /// Array item schema.
    pub items: Option<Box<Schema>>,
    /// Required property names.
    pub required: Vec<String>,
    /// Explicit example, returned verbatim.
    pub example: Option<Value>,
    /// Allowed values; the first is used for synthesis.
    #[serde(rename = "enum")]
    pub enum_values: Vec<Value>,
    /// `$ref` pointer. When non-empty every other field is ignored.
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Schema {
    /// Returns true when this schema is a `$ref` pointer.
    pub fn is_reference(&self) -> bool {
        !self.reference.is_empty()
    }
}

/// OAS 3.x `components`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Named schemas targeted by `#/components/schemas/{name}`.
    pub schemas: IndexMap<String, Schema>,
    /// Named security schemes.
    #[serde(rename = "securitySchemes")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// Kind of a security scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SecuritySchemeType {
    /// API key in a header, query or cookie.
    #[serde(rename = "apiKey")]
    ApiKey,
    /// HTTP authentication (`bearer`, `basic`, ...).
    #[serde(rename = "http")]
    Http,
    /// OAuth 2.0.
    #[serde(rename = "oauth2")]
    OAuth2,
    /// OpenID Connect discovery.
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
    /// Unknown or missing type (e.g. Swagger 2.0 `basic`).
    #[default]
    #[serde(other)]
    Other,
}

/// A named authentication mechanism.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityScheme {
    /// Scheme type.
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,
    /// HTTP auth scheme, meaningful for `type: http`.
    pub scheme: String,
    /// Key location for `type: apiKey` (`header`, `query`, `cookie`).
    #[serde(rename = "in")]
    pub location: String,
    /// Header/query name for `type: apiKey`.
    pub name: String,
}
