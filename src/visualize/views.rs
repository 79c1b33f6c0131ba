//! The three diagram views.

use std::collections::{BTreeMap, BTreeSet};

use super::mermaid::{Flowchart, Tier};
use crate::config::VisualizeConfig;
use crate::error::Result;
use crate::graph::{DocumentNode, GraphReport};

/// Hubs and their most-linked neighbours.
///
/// # Errors
/// Returns `InconsistentReport` if the hub list names unknown nodes.
pub fn hub_view(report: &GraphReport, config: &VisualizeConfig) -> Result<String> {
    let (hubs, fallback) = focus_hubs(report, config)?;
    let mut chart = Flowchart::new("TD");
    if fallback && !hubs.is_empty() {
        chart.comment("no hubs yet: showing the most-referenced documents instead");
    }

    if hubs.is_empty() {
        chart.node("empty", "No linked documents yet", "more");
        return Ok(chart.finish());
    }

    let mut declared: BTreeSet<&str> = BTreeSet::new();
    let mut edges: BTreeSet<(&str, &str)> = BTreeSet::new();

    for hub in hubs.iter().copied() {
        declare(&mut chart, &mut declared, hub, config);
        for neighbor in top_neighbors(report, hub, config.neighbors_per_hub) {
            declare(&mut chart, &mut declared, neighbor, config);
            if hub.inbound_references.contains(&neighbor.relative_path) {
                edges.insert((neighbor.relative_path.as_str(), hub.relative_path.as_str()));
            }
            if neighbor.inbound_references.contains(&hub.relative_path) {
                edges.insert((hub.relative_path.as_str(), neighbor.relative_path.as_str()));
            }
        }
    }

    for (from, to) in edges {
        chart.edge(from, to);
    }
    Ok(chart.finish())
}

/// Documents grouped by directory with a capped edge count.
#[must_use]
pub fn cluster_view(report: &GraphReport, config: &VisualizeConfig) -> String {
    let mut chart = Flowchart::new("LR");
    let mut by_dir: BTreeMap<&str, Vec<&DocumentNode>> = BTreeMap::new();
    for node in &report.nodes {
        by_dir.entry(node.directory.as_str()).or_default().push(node);
    }

    let mut dirs: Vec<(&str, Vec<&DocumentNode>)> = by_dir.into_iter().collect();
    dirs.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));
    if dirs.len() > config.max_directories {
        chart.comment(&format!(
            "showing {} of {} directories",
            config.max_directories,
            dirs.len()
        ));
        dirs.truncate(config.max_directories);
    }

    let mut shown: Vec<&DocumentNode> = Vec::new();
    for (dir, mut members) in dirs {
        members.sort_by(|a, b| {
            b.link_count
                .cmp(&a.link_count)
                .then_with(|| a.relative_path.cmp(&b.relative_path))
        });
        chart.begin_subgraph(dir, display_dir(dir));
        let hidden = members.len().saturating_sub(config.nodes_per_directory);
        for node in members.into_iter().take(config.nodes_per_directory) {
            chart.node(&node.relative_path, &short_label(node), tier_class(node, config));
            shown.push(node);
        }
        if hidden > 0 {
            chart.node(&format!("more:{dir}"), &format!("+{hidden} more"), "more");
        }
        chart.end_subgraph();
    }

    let visible: BTreeSet<&str> = shown.iter().map(|n| n.relative_path.as_str()).collect();
    let mut candidate_edges: Vec<(&str, &str)> = Vec::new();
    for target in &shown {
        for source in &target.inbound_references {
            if source != &target.relative_path && visible.contains(source.as_str()) {
                candidate_edges.push((source.as_str(), target.relative_path.as_str()));
            }
        }
    }
    candidate_edges.sort_unstable();

    if candidate_edges.len() > config.max_edges {
        chart.comment(&format!(
            "showing {} of {} edges",
            config.max_edges,
            candidate_edges.len()
        ));
    }
    for (from, to) in candidate_edges.into_iter().take(config.max_edges) {
        chart.edge(from, to);
    }
    chart.finish()
}

/// Orphans grouped by directory, coloured for attention.
///
/// # Errors
/// Returns `InconsistentReport` if the orphan list names unknown nodes.
pub fn orphan_view(report: &GraphReport, config: &VisualizeConfig) -> Result<String> {
    let orphans = report.orphan_nodes()?;
    let mut chart = Flowchart::new("TD");

    if orphans.is_empty() {
        chart.node("none", "No orphaned documents", "well");
        return Ok(chart.finish());
    }

    let mut by_dir: BTreeMap<&str, Vec<&DocumentNode>> = BTreeMap::new();
    for node in orphans.iter().copied().take(config.max_orphans) {
        by_dir.entry(node.directory.as_str()).or_default().push(node);
    }

    for (dir, members) in by_dir {
        chart.begin_subgraph(dir, display_dir(dir));
        for node in members {
            chart.node(&node.relative_path, &short_label(node), Tier::Orphan.class());
        }
        chart.end_subgraph();
    }

    let overflow = orphans.len().saturating_sub(config.max_orphans);
    if overflow > 0 {
        chart.node("more:orphans", &format!("+{overflow} more orphans"), "more");
    }
    Ok(chart.finish())
}

/// Report hubs, or the most-referenced documents when none cross the hub
/// threshold. The flag is set in the second case.
fn focus_hubs<'a>(
    report: &'a GraphReport,
    config: &VisualizeConfig,
) -> Result<(Vec<&'a DocumentNode>, bool)> {
    let mut hubs = report.hub_nodes()?;
    let fallback = hubs.is_empty();
    if fallback {
        hubs = report.nodes.iter().filter(|n| n.inbound_count() > 0).collect();
        hubs.sort_by(by_inbound_then_path);
    }
    hubs.truncate(config.top_hubs);
    Ok((hubs, fallback))
}

/// Documents linked to `hub` in either direction, most-referenced first.
fn top_neighbors<'a>(
    report: &'a GraphReport,
    hub: &DocumentNode,
    limit: usize,
) -> Vec<&'a DocumentNode> {
    let mut neighbors: Vec<&DocumentNode> = report
        .nodes
        .iter()
        .filter(|n| n.relative_path != hub.relative_path)
        .filter(|n| {
            hub.inbound_references.contains(&n.relative_path)
                || n.inbound_references.contains(&hub.relative_path)
        })
        .collect();
    neighbors.sort_by(by_inbound_then_path);
    neighbors.truncate(limit);
    neighbors
}

fn by_inbound_then_path(a: &&DocumentNode, b: &&DocumentNode) -> std::cmp::Ordering {
    b.inbound_count()
        .cmp(&a.inbound_count())
        .then_with(|| a.relative_path.cmp(&b.relative_path))
}

fn declare<'a>(
    chart: &mut Flowchart,
    declared: &mut BTreeSet<&'a str>,
    node: &'a DocumentNode,
    config: &VisualizeConfig,
) {
    if declared.insert(node.relative_path.as_str()) {
        chart.node(&node.relative_path, &short_label(node), tier_class(node, config));
    }
}

fn tier_class(node: &DocumentNode, config: &VisualizeConfig) -> &'static str {
    Tier::of(node, config.hub_tier_inbound).class()
}

fn short_label(node: &DocumentNode) -> String {
    format!("{} ({})", node.title, node.link_count)
}

fn display_dir(dir: &str) -> &str {
    if dir.is_empty() {
        "."
    } else {
        dir
    }
}
