// src/graph/builder.rs
//! Graph construction in three passes: parse shells, index inbound edges,
//! assemble final nodes.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use super::metrics;
use super::resolver::Resolver;
use super::types::{DocumentNode, GraphReport, SkippedDocument};
use crate::config::Config;
use crate::discovery::{self, relative_id};
use crate::document::{self, keywords::parent_dir};
use crate::error::{Result, VaultError};

/// Pass-1 output for one document: everything except inbound edges.
#[derive(Debug, Clone)]
pub struct NodeShell {
    pub path: PathBuf,
    pub relative_path: String,
    pub title: String,
    pub tags: Vec<String>,
    pub outbound: Vec<String>,
    pub body_keywords: Vec<String>,
}

/// Inbound edge index: target relative path -> sources.
pub type InboundIndex = BTreeMap<String, BTreeSet<String>>;

/// Scans the corpus and builds the Graph Report.
///
/// # Errors
/// Returns `RootUnreadable` if the corpus root cannot be listed. Individual
/// unreadable or malformed documents are logged and skipped.
pub fn build(config: &Config) -> Result<GraphReport> {
    let config = &config.canonicalized()?;
    let files = discovery::discover(config)?;
    tracing::info!(files = files.len(), root = %config.root.display(), "scanning corpus");

    let sources = files.into_iter().map(|path| {
        let content = fs::read_to_string(&path);
        (path, content)
    });
    Ok(build_from_sources(config, sources))
}

/// Builds a report from already-read file contents. Read failures are
/// recorded as skipped documents.
pub fn build_from_sources<I>(config: &Config, sources: I) -> GraphReport
where
    I: IntoIterator<Item = (PathBuf, std::io::Result<String>)>,
{
    let (shells, skipped) = parse_shells(&config.root, sources);
    let inbound = index_inbound(config, &shells);
    let nodes = assemble(shells, inbound);
    metrics::summarize(nodes, skipped, &config.graph)
}

/// Pass 1: one shell per readable document, keyed by relative path.
pub fn parse_shells<I>(root: &Path, sources: I) -> (BTreeMap<String, NodeShell>, Vec<SkippedDocument>)
where
    I: IntoIterator<Item = (PathBuf, std::io::Result<String>)>,
{
    let mut shells = BTreeMap::new();
    let mut skipped = Vec::new();

    for (path, content) in sources {
        let relative_path = relative_id(root, &path);
        match content {
            Ok(content) => {
                let shell = parse_shell(path, relative_path.clone(), &content);
                shells.insert(relative_path, shell);
            }
            Err(e) => {
                tracing::warn!(file = %relative_path, error = %e, "skipping unreadable document");
                skipped.push(SkippedDocument {
                    file: relative_path,
                    reason: e.to_string(),
                });
            }
        }
    }

    (shells, skipped)
}

fn parse_shell(path: PathBuf, relative_path: String, content: &str) -> NodeShell {
    let parsed = document::parse(content);
    if let Some(message) = &parsed.metadata_error {
        let err = VaultError::Frontmatter {
            path: path.clone(),
            message: message.clone(),
        };
        tracing::warn!(
            file = %relative_path,
            error = %err,
            "treating whole file as body"
        );
    }

    let title = parsed
        .metadata
        .title
        .unwrap_or_else(|| relative_path.clone());

    NodeShell {
        path,
        title,
        tags: parsed.metadata.tags,
        outbound: parsed.references.into_iter().map(|r| r.target).collect(),
        body_keywords: parsed.body_keywords.into_iter().collect(),
        relative_path,
    }
}

/// Pass 2: resolve every outbound reference and record the source under its
/// target. A source appears at most once per target.
#[must_use]
pub fn index_inbound(config: &Config, shells: &BTreeMap<String, NodeShell>) -> InboundIndex {
    let known: BTreeSet<String> = shells.keys().cloned().collect();
    let resolver = Resolver::new(&known, &config.scan);
    let mut inbound = InboundIndex::new();

    for (source, shell) in shells {
        for target in &shell.outbound {
            match resolver.resolve(source, target) {
                Some(resolved) => {
                    inbound.entry(resolved).or_default().insert(source.clone());
                }
                None => tracing::debug!(file = %source, target = %target, "unresolved reference"),
            }
        }
    }

    inbound
}

/// Pass 3: merge shells with the inbound index into final nodes.
#[must_use]
pub fn assemble(shells: BTreeMap<String, NodeShell>, mut inbound: InboundIndex) -> Vec<DocumentNode> {
    shells
        .into_values()
        .map(|shell| {
            let inbound_references: Vec<String> = inbound
                .remove(&shell.relative_path)
                .map(|set| set.into_iter().collect())
                .unwrap_or_default();
            let link_count = inbound_references.len() + shell.outbound.len();

            DocumentNode {
                directory: parent_dir(&shell.relative_path).to_string(),
                path: shell.path,
                relative_path: shell.relative_path,
                title: shell.title,
                tags: shell.tags,
                outbound_references: shell.outbound,
                inbound_references,
                body_keywords: shell.body_keywords,
                link_count,
                is_orphan: link_count == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(docs: &[(&str, &str)]) -> Vec<(PathBuf, std::io::Result<String>)> {
        docs.iter()
            .map(|(p, c)| (PathBuf::from("/vault").join(p), Ok((*c).to_string())))
            .collect()
    }

    #[test]
    fn inbound_is_deduplicated_per_source() {
        let config = Config::new("/vault");
        let report = build_from_sources(
            &config,
            sources(&[("a.md", "[[b]] [[b|again]] [[b.md#top]]"), ("b.md", "")]),
        );
        let b = report.node("b.md").unwrap();
        assert_eq!(b.inbound_references, vec!["a.md"]);
        assert_eq!(b.link_count, 1);
        assert_eq!(report.node("a.md").unwrap().link_count, 3);
    }

    #[test]
    fn self_reference_is_allowed() {
        let config = Config::new("/vault");
        let report = build_from_sources(&config, sources(&[("loop.md", "[[loop]]")]));
        let node = report.node("loop.md").unwrap();
        assert_eq!(node.inbound_references, vec!["loop.md"]);
        assert_eq!(node.link_count, 2);
        assert!(!node.is_orphan);
    }

    #[test]
    fn unreadable_source_is_skipped() {
        let config = Config::new("/vault");
        let mut input = sources(&[("ok.md", "text")]);
        input.push((
            PathBuf::from("/vault/bad.md"),
            Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8")),
        ));
        let report = build_from_sources(&config, input);
        assert_eq!(report.metrics.total_files, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "bad.md");
    }

    #[test]
    fn title_falls_back_to_relative_path() {
        let config = Config::new("/vault");
        let report = build_from_sources(
            &config,
            sources(&[("t/named.md", "---\ntitle: Named\n---\n"), ("t/bare.md", "x")]),
        );
        assert_eq!(report.node("t/named.md").unwrap().title, "Named");
        assert_eq!(report.node("t/bare.md").unwrap().title, "t/bare.md");
        assert_eq!(report.node("t/bare.md").unwrap().directory, "t");
    }
}
