#![deny(missing_docs)]

//! # Output Grouping
//!
//! Assembles rendered requests into named `.http` documents, either one combined file
//! or one file per first tag.
//!
//! Iteration follows document order for paths and the fixed
//! GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS order within a path. Tag buckets are
//! emitted in order of first appearance, with the untagged bucket last. Tags whose
//! file names collide (`Users` and `users`) share one file titled by the first
//! spelling seen; untagged operations join a literal `Untagged` tag's file.

use crate::oas::{Document, HttpMethod, Operation};
use crate::render::RequestRenderer;
use crate::target::ResolvedTarget;
use indexmap::IndexMap;
use std::fmt::Write;

/// Name of the single output in combined mode.
pub const COMBINED_FILE_NAME: &str = "api.http";
/// Title used for operations without tags.
pub const UNTAGGED_BUCKET: &str = "Untagged";
/// File name of the untagged bucket.
pub const UNTAGGED_FILE_NAME: &str = "untagged.http";

/// How operations are partitioned into files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Everything in `api.http`.
    #[default]
    Combined,
    /// One file per first tag, plus `untagged.http`.
    SplitByTag,
}

/// A generated `.http` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name, without directory.
    pub name: String,
    /// Full file content.
    pub content: String,
}

/// One operation located in the document.
#[derive(Debug, Clone, Copy)]
struct Endpoint<'a> {
    method: HttpMethod,
    path: &'a str,
    op: &'a Operation,
}

/// Converts a parsed document into `.http` files.
#[derive(Debug)]
pub struct Converter<'a> {
    document: &'a Document,
    target: ResolvedTarget,
}

/// File name for a tag bucket: lowercased, spaces replaced by underscores.
pub fn tag_file_name(tag: &str) -> String {
    format!("{}.http", tag.to_lowercase().replace(' ', "_"))
}

/// Converts `document` in one call.
pub fn convert(document: &Document, mode: OutputMode) -> Vec<GeneratedFile> {
    Converter::new(document).convert(mode)
}

impl<'a> Converter<'a> {
    /// Resolves the target once; it stays fixed for the converter's lifetime.
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            target: ResolvedTarget::resolve(document),
        }
    }

    /// Produces the output files for `mode`.
    pub fn convert(&self, mode: OutputMode) -> Vec<GeneratedFile> {
        match mode {
            OutputMode::Combined => vec![GeneratedFile {
                name: COMBINED_FILE_NAME.to_string(),
                content: self.combined(),
            }],
            OutputMode::SplitByTag => self.split_by_tag(),
        }
    }

    fn endpoints(&self) -> impl Iterator<Item = Endpoint<'a>> + 'a {
        let document: &'a Document = self.document;
        document.paths.iter().flat_map(|(path, item)| {
            item.operations().map(move |(method, op)| Endpoint {
                method,
                path: path.as_str(),
                op,
            })
        })
    }

    fn push_variables(&self, out: &mut String) {
        out.push_str("# Variables\n");
        let _ = writeln!(out, "@baseUrl={}", self.target.base_url);
        if !self.target.security.is_empty() {
            out.push_str("@token=your_token_here\n");
            out.push_str("@api_key=your_api_key_here\n");
        }
        out.push('\n');
    }

    fn push_requests(&self, out: &mut String, endpoints: &[Endpoint<'a>]) {
        let renderer = RequestRenderer::new(self.document, &self.target);
        for e in endpoints {
            out.push_str(&renderer.render(e.method, e.path, e.op));
            out.push('\n');
        }
    }

    fn combined(&self) -> String {
        let info = &self.document.info;
        let mut out = String::new();
        let _ = writeln!(out, "# {} - v{}", info.title, info.version);
        for line in info.description.trim_end().lines() {
            let _ = writeln!(out, "# {}", line.trim_end());
        }
        out.push('\n');
        self.push_variables(&mut out);

        let endpoints: Vec<Endpoint<'a>> = self.endpoints().collect();
        self.push_requests(&mut out, &endpoints);
        out
    }

    fn tagged_file(&self, tag: &str, endpoints: &[Endpoint<'a>]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {} - {}", self.document.info.title, tag);
        out.push('\n');
        self.push_variables(&mut out);
        self.push_requests(&mut out, endpoints);
        out
    }

    fn split_by_tag(&self) -> Vec<GeneratedFile> {
        // Keyed by file name so tags differing only in case or spacing share a file.
        let mut buckets: IndexMap<String, (&'a str, Vec<Endpoint<'a>>)> = IndexMap::new();
        let mut untagged = Vec::new();

        for endpoint in self.endpoints() {
            let Some(tag) = endpoint.op.tags.first() else {
                untagged.push(endpoint);
                continue;
            };
            let (title, endpoints) = buckets
                .entry(tag_file_name(tag))
                .or_insert_with(|| (tag.as_str(), Vec::new()));
            if *title != tag.as_str() && endpoints.iter().all(|e| e.op.tags.first() != Some(tag)) {
                tracing::warn!(tag = %tag, merged_into = %title, "tags map to the same file name, merging");
            }
            endpoints.push(endpoint);
        }

        if !untagged.is_empty() {
            let (title, endpoints) = buckets
                .entry(UNTAGGED_FILE_NAME.to_string())
                .or_insert_with(|| (UNTAGGED_BUCKET, Vec::new()));
            if *title != UNTAGGED_BUCKET || !endpoints.is_empty() {
                tracing::warn!(merged_into = %title, "untagged operations share a file with a tag");
            }
            endpoints.extend(untagged);
        }

        buckets
            .into_iter()
            .map(|(name, (title, endpoints))| GeneratedFile {
                content: self.tagged_file(title, &endpoints),
                name,
            })
            .collect()
    }
}
