//! Aggregate metrics over assembled nodes.

use super::clusters;
use super::recommend;
use super::types::{DocumentNode, GraphMetrics, GraphReport, HubEntry, SkippedDocument};
use crate::config::GraphConfig;

/// Computes metrics, orphan and hub lists, and recommendations.
#[must_use]
pub fn summarize(
    nodes: Vec<DocumentNode>,
    skipped: Vec<SkippedDocument>,
    config: &GraphConfig,
) -> GraphReport {
    let orphans: Vec<String> = nodes
        .iter()
        .filter(|n| n.is_orphan)
        .map(|n| n.relative_path.clone())
        .collect();

    let hub_documents = rank_hubs(&nodes, config);
    let components = clusters::components(&nodes);

    let metrics = GraphMetrics {
        total_files: nodes.len(),
        total_links: nodes.iter().map(|n| n.outbound_references.len()).sum(),
        resolved_links: nodes.iter().map(DocumentNode::inbound_count).sum(),
        orphaned_files: orphans.len(),
        average_links_per_file: average_links(&nodes),
        weakly_connected: nodes.iter().filter(|n| n.link_count == 1).count(),
        well_connected: nodes
            .iter()
            .filter(|n| n.link_count >= config.well_connected_min)
            .count(),
        clusters: components.len(),
        largest_cluster: components.iter().map(Vec::len).max().unwrap_or(0),
        hub_documents,
    };

    let recommendations = recommend::generate(&metrics);
    let hubs = metrics.hub_documents.iter().map(|h| h.file.clone()).collect();

    GraphReport {
        metrics,
        nodes,
        orphans,
        hubs,
        recommendations,
        skipped,
    }
}

/// Nodes whose inbound count exceeds the threshold, most-linked first,
/// ties broken by path.
#[must_use]
pub fn rank_hubs(nodes: &[DocumentNode], config: &GraphConfig) -> Vec<HubEntry> {
    let mut hubs: Vec<HubEntry> = nodes
        .iter()
        .filter(|n| n.inbound_count() > config.hub_inbound_threshold)
        .map(|n| HubEntry {
            file: n.relative_path.clone(),
            inbound_links: n.inbound_count(),
        })
        .collect();
    hubs.sort_by(|a, b| b.inbound_links.cmp(&a.inbound_links).then_with(|| a.file.cmp(&b.file)));
    hubs.truncate(config.max_hubs);
    hubs
}

#[allow(clippy::cast_precision_loss)]
fn average_links(nodes: &[DocumentNode]) -> f64 {
    if nodes.is_empty() {
        return 0.0;
    }
    let total: usize = nodes.iter().map(|n| n.link_count).sum();
    round2(total as f64 / nodes.len() as f64)
}

#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn node(path: &str, inbound: usize, outbound: usize) -> DocumentNode {
        let inbound_references: Vec<String> = (0..inbound).map(|i| format!("src{i:02}.md")).collect();
        DocumentNode {
            path: PathBuf::from(path),
            relative_path: path.to_string(),
            directory: String::new(),
            title: path.to_string(),
            tags: Vec::new(),
            outbound_references: vec!["x".to_string(); outbound],
            inbound_references,
            body_keywords: Vec::new(),
            link_count: inbound + outbound,
            is_orphan: inbound + outbound == 0,
        }
    }

    #[test]
    fn hub_threshold_is_strict() {
        let nodes = vec![node("ten.md", 10, 0), node("eleven.md", 11, 0), node("twelve.md", 12, 0)];
        let hubs = rank_hubs(&nodes, &GraphConfig::default());
        let files: Vec<_> = hubs.iter().map(|h| h.file.as_str()).collect();
        assert_eq!(files, vec!["twelve.md", "eleven.md"]);
    }

    #[test]
    fn connectivity_counts() {
        let nodes = vec![node("a.md", 0, 0), node("b.md", 1, 0), node("c.md", 2, 3), node("d.md", 0, 1)];
        let report = summarize(nodes, Vec::new(), &GraphConfig::default());
        assert_eq!(report.metrics.weakly_connected, 2);
        assert_eq!(report.metrics.well_connected, 1);
        assert_eq!(report.metrics.orphaned_files, 1);
        assert!((report.metrics.average_links_per_file - 1.75).abs() < 1e-9);
        assert_eq!(report.orphans, vec!["a.md"]);
    }

    #[test]
    fn average_is_rounded() {
        assert!((round2(7.0 / 3.0) - 2.33).abs() < 1e-9);
    }
}
