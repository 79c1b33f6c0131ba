//! Parsing a single document: metadata block, body references and keywords.

pub mod frontmatter;
pub mod keywords;
pub mod links;

pub use frontmatter::Metadata;
pub use links::Reference;

use std::collections::BTreeSet;

/// Everything the graph needs from one file's content.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub metadata: Metadata,
    pub references: Vec<Reference>,
    pub body_keywords: BTreeSet<String>,
    /// Set when the metadata block was malformed and the whole file was
    /// treated as body.
    pub metadata_error: Option<String>,
}

/// Parses document content. Never fails: a malformed metadata block yields
/// empty metadata, the full content as body and a recorded error.
#[must_use]
pub fn parse(content: &str) -> ParsedDocument {
    let (metadata, body, metadata_error) = match frontmatter::split(content) {
        Ok(split) => (split.metadata, split.body, None),
        Err(message) => (Metadata::default(), content, Some(message)),
    };

    ParsedDocument {
        metadata,
        references: links::extract(body),
        body_keywords: keywords::body_keywords(body),
        metadata_error,
    }
}
