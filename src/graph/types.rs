//! Graph Report records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, VaultError};

/// One parsed document after inbound resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    pub path: PathBuf,
    /// Stable identifier: forward-slash path relative to the corpus root.
    pub relative_path: String,
    /// Directory part of `relative_path`, empty at the root.
    pub directory: String,
    pub title: String,
    pub tags: Vec<String>,
    /// Raw targets in body order, before resolution.
    pub outbound_references: Vec<String>,
    /// Sorted, de-duplicated sources whose references resolved here.
    pub inbound_references: Vec<String>,
    pub body_keywords: Vec<String>,
    pub link_count: usize,
    pub is_orphan: bool,
}

impl DocumentNode {
    #[must_use]
    pub fn inbound_count(&self) -> usize {
        self.inbound_references.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubEntry {
    pub file: String,
    pub inbound_links: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetrics {
    pub total_files: usize,
    /// Raw outbound references, resolved or not.
    pub total_links: usize,
    /// Distinct resolved source→target edges.
    pub resolved_links: usize,
    pub orphaned_files: usize,
    pub average_links_per_file: f64,
    /// Documents with exactly one link (inbound + outbound).
    pub weakly_connected: usize,
    pub well_connected: usize,
    /// Weakly-connected components over resolved edges taken as undirected.
    pub clusters: usize,
    pub largest_cluster: usize,
    pub hub_documents: Vec<HubEntry>,
}

/// A file dropped from the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedDocument {
    pub file: String,
    pub reason: String,
}

/// Corpus-wide snapshot produced by the graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReport {
    pub metrics: GraphMetrics,
    /// Sorted by `relative_path`.
    pub nodes: Vec<DocumentNode>,
    pub orphans: Vec<String>,
    pub hubs: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub skipped: Vec<SkippedDocument>,
}

impl GraphReport {
    /// Looks up a node by relative path.
    #[must_use]
    pub fn node(&self, relative_path: &str) -> Option<&DocumentNode> {
        self.nodes
            .binary_search_by(|n| n.relative_path.as_str().cmp(relative_path))
            .ok()
            .and_then(|i| self.nodes.get(i))
    }

    /// Resolves the orphan list to node records.
    ///
    /// # Errors
    /// Returns `InconsistentReport` if an orphan entry names no node.
    pub fn orphan_nodes(&self) -> Result<Vec<&DocumentNode>> {
        self.lookup_all(&self.orphans, "orphan")
    }

    /// Resolves the hub list to node records, in hub rank order.
    ///
    /// # Errors
    /// Returns `InconsistentReport` if a hub entry names no node.
    pub fn hub_nodes(&self) -> Result<Vec<&DocumentNode>> {
        self.lookup_all(&self.hubs, "hub")
    }

    /// Nodes with at least one link, in path order.
    pub fn connected_nodes(&self) -> impl Iterator<Item = &DocumentNode> {
        self.nodes.iter().filter(|n| !n.is_orphan)
    }

    fn lookup_all(&self, paths: &[String], kind: &str) -> Result<Vec<&DocumentNode>> {
        paths
            .iter()
            .map(|p| {
                self.node(p).ok_or_else(|| {
                    VaultError::InconsistentReport(format!("{kind} `{p}` is not a known node"))
                })
            })
            .collect()
    }
}
