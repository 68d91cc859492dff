#![deny(missing_docs)]

//! # Request Rendering
//!
//! Turns one operation into a kulala request block:
//!
//! ```text
//! ###
//! # <summary>
//! # <description>
//! # Operation ID: <id>
//! <METHOD> {{baseUrl}}<path-with-interpolated-params>?<query>
//! <Header-Name>: <value>
//!
//! <body JSON, if any>
//! ```
//!
//! The base URL is referenced through the `{{baseUrl}}` variable so the file stays
//! reusable across environments.

use crate::body::{content_type, request_body};
use crate::example::example_for_parameter;
use crate::oas::{Document, HttpMethod, Operation, ParamLocation, Parameter};
use crate::security::security_headers;
use crate::target::ResolvedTarget;
use indexmap::IndexMap;
use std::fmt::Write;

/// Line that opens every request block.
pub const REQUEST_DELIMITER: &str = "###";

/// Renders request blocks against a resolved target.
#[derive(Debug, Clone, Copy)]
pub struct RequestRenderer<'a> {
    document: &'a Document,
    target: &'a ResolvedTarget,
}

/// Parameters of one operation split by location.
#[derive(Debug, Default)]
struct PartitionedParams<'a> {
    path: IndexMap<&'a str, &'a Parameter>,
    query: Vec<&'a Parameter>,
    header: Vec<&'a Parameter>,
}

impl<'a> PartitionedParams<'a> {
    fn from_operation(op: &'a Operation) -> Self {
        let mut params = Self::default();
        for param in &op.parameters {
            match param.location {
                ParamLocation::Path => {
                    params.path.insert(param.name.as_str(), param);
                }
                ParamLocation::Query => params.query.push(param),
                ParamLocation::Header => params.header.push(param),
                // Body parameters feed the payload; cookies are not rendered.
                ParamLocation::Body | ParamLocation::Cookie | ParamLocation::Other => {}
            }
        }
        params
    }
}

/// Appends `text` as `# ` comment lines, one per source line.
fn push_comment(out: &mut String, text: &str) {
    for line in text.trim_end().lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str("#\n");
        } else {
            let _ = writeln!(out, "# {}", line);
        }
    }
}

/// Interpolates path parameters and appends the query string.
///
/// Placeholders without a matching parameter are left verbatim.
pub fn build_url(path: &str, op: &Operation) -> String {
    let params = PartitionedParams::from_operation(op);
    build_url_from(path, &params)
}

fn build_url_from(path: &str, params: &PartitionedParams<'_>) -> String {
    let mut url = path.to_string();
    for (name, param) in &params.path {
        let placeholder = format!("{{{}}}", name);
        url = url.replace(&placeholder, &example_for_parameter(param));
    }

    if !params.query.is_empty() {
        let query: Vec<String> = params
            .query
            .iter()
            .map(|p| format!("{}={}", p.name, example_for_parameter(p)))
            .collect();
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

fn is_content_type_header(header: &str) -> bool {
    header
        .split_once(':')
        .is_some_and(|(name, _)| name.trim().eq_ignore_ascii_case("content-type"))
}

impl<'a> RequestRenderer<'a> {
    /// Creates a renderer for `document` using its resolved `target`.
    pub fn new(document: &'a Document, target: &'a ResolvedTarget) -> Self {
        Self { document, target }
    }

    /// Renders one request block. Output is deterministic for a given input.
    pub fn render(&self, method: HttpMethod, path: &str, op: &Operation) -> String {
        tracing::debug!(%method, path, operation_id = %op.operation_id, "rendering request");

        let mut out = String::new();

        out.push_str(REQUEST_DELIMITER);
        out.push('\n');
        if !op.summary.is_empty() {
            push_comment(&mut out, &op.summary);
        }
        if !op.description.is_empty() && op.description != op.summary {
            push_comment(&mut out, &op.description);
        }
        if !op.operation_id.is_empty() {
            let _ = writeln!(out, "# Operation ID: {}", op.operation_id);
        }

        let params = PartitionedParams::from_operation(op);
        let url = build_url_from(path, &params);
        let _ = writeln!(out, "{} {{{{baseUrl}}}}{}", method, url);

        let mut headers = security_headers(op, self.document, &self.target.security);
        headers.extend(
            params
                .header
                .iter()
                .map(|p| format!("{}: {}", p.name, example_for_parameter(p))),
        );
        if method.carries_body() && !headers.iter().any(|h| is_content_type_header(h)) {
            headers.push(format!("Content-Type: {}", content_type(op, self.document)));
        }
        for header in &headers {
            out.push_str(header);
            out.push('\n');
        }

        if method.carries_body() {
            let body = request_body(op, self.document);
            if !body.is_empty() {
                out.push('\n');
                out.push_str(&body);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::parse_document;
    use pretty_assertions::assert_eq;

    fn render(yaml: &str, method: HttpMethod, path: &str) -> String {
        let doc = parse_document(yaml).unwrap();
        let target = ResolvedTarget::resolve(&doc);
        let item = &doc.paths[path];
        let (_, op) = item
            .operations()
            .find(|(m, _)| *m == method)
            .unwrap();
        RequestRenderer::new(&doc, &target).render(method, path, op)
    }

    #[test]
    fn test_path_interpolation() {
        let yaml = r#"
openapi: 3.0.0
paths:
  /users/{id}/posts/{postId}:
    get:
      parameters:
        - {name: id, in: path, required: true, example: "42", schema: {type: string}}
        - {name: postId, in: path, required: true, schema: {type: integer}}
"#;
        assert_eq!(
            render(yaml, HttpMethod::Get, "/users/{id}/posts/{postId}"),
            "###\nGET {{baseUrl}}/users/42/posts/0\n"
        );
    }

    #[test]
    fn test_unmatched_placeholder_and_query_order() {
        // Only a parameter-level `default` counts; the schema's default is not consulted.
        let yaml = r#"
openapi: 3.0.0
paths:
  /orgs/{org}/repos:
    get:
      parameters:
        - {name: per_page, in: query, schema: {type: integer, default: 30}}
        - {name: q, in: query, schema: {type: string}}
        - {name: since, in: query, schema: {type: string, format: date-time}}
"#;
        assert_eq!(
            render(yaml, HttpMethod::Get, "/orgs/{org}/repos"),
            "###\nGET {{baseUrl}}/orgs/{org}/repos?per_page=0&q=value&since=2024-01-01T00:00:00Z\n"
        );
    }

    #[test]
    fn test_duplicate_path_param_last_wins() {
        let op: Operation = serde_yaml::from_str(
            r#"
parameters:
  - {name: id, in: path, example: first}
  - {name: id, in: path, example: second}
"#,
        )
        .unwrap();
        assert_eq!(build_url("/items/{id}/{id}", &op), "/items/second/second");
    }

    #[test]
    fn test_comment_block() {
        let yaml = r#"
openapi: 3.0.0
paths:
  /pets:
    get:
      summary: List pets
      description: List pets
      operationId: listPets
    delete:
      summary: Purge
      description: |
        Removes every pet.
        Irreversible.
"#;
        assert_eq!(
            render(yaml, HttpMethod::Get, "/pets"),
            "###\n# List pets\n# Operation ID: listPets\nGET {{baseUrl}}/pets\n"
        );
        assert_eq!(
            render(yaml, HttpMethod::Delete, "/pets"),
            "###\n# Purge\n# Removes every pet.\n# Irreversible.\nDELETE {{baseUrl}}/pets\n"
        );
    }

    #[test]
    fn test_headers_and_body() {
        let yaml = r#"
openapi: 3.0.0
security:
  - bearer: []
components:
  securitySchemes:
    bearer: {type: http, scheme: bearer}
paths:
  /users:
    post:
      parameters:
        - {name: X-Request-Id, in: header, schema: {type: string, format: uuid}}
        - {name: session, in: cookie, schema: {type: string}}
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                name: {type: string}
                age: {type: integer}
"#;
        let expected = "###\n\
POST {{baseUrl}}/users\n\
Authorization: Bearer {{token}}\n\
X-Request-Id: 123e4567-e89b-12d3-a456-426614174000\n\
Content-Type: application/json\n\
\n\
{\n  \"name\": \"string\",\n  \"age\": 0\n}";
        assert_eq!(render(yaml, HttpMethod::Post, "/users"), expected);
    }

    #[test]
    fn test_explicit_content_type_header_suppresses_default() {
        let yaml = r#"
openapi: 3.0.0
paths:
  /upload:
    put:
      parameters:
        - {name: content-type, in: header, example: text/csv}
"#;
        assert_eq!(
            render(yaml, HttpMethod::Put, "/upload"),
            "###\nPUT {{baseUrl}}/upload\ncontent-type: text/csv\n"
        );
    }

    #[test]
    fn test_bodyless_methods_skip_content_type() {
        let yaml = r#"
openapi: 3.0.0
paths:
  /users:
    get:
      requestBody:
        content:
          application/json: {schema: {type: object}}
"#;
        assert_eq!(
            render(yaml, HttpMethod::Get, "/users"),
            "###\nGET {{baseUrl}}/users\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let yaml = r#"
openapi: 3.0.0
paths:
  /a/{b}:
    patch:
      parameters:
        - {name: b, in: path, schema: {type: boolean}}
        - {name: c, in: query, schema: {type: string, enum: [x, y]}}
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                z: {type: array, items: {type: number}}
                a: {type: string, format: date}
"#;
        let first = render(yaml, HttpMethod::Patch, "/a/{b}");
        let second = render(yaml, HttpMethod::Patch, "/a/{b}");
        assert_eq!(first, second);
        assert!(first.starts_with("###\nPATCH {{baseUrl}}/a/true?c=x\n"));
    }
}
