//! Mermaid rendering of a Graph Report: hub, directory-cluster and orphan
//! views, each followed by the colour legend.

pub mod legend;
pub mod mermaid;
pub mod views;

use std::fmt::Write as _;

use crate::config::VisualizeConfig;
use crate::error::Result;
use crate::graph::GraphReport;

/// Renders the full visualization document as markdown with fenced Mermaid
/// blocks.
///
/// # Errors
/// Returns `InconsistentReport` if the report's hub or orphan lists name
/// unknown nodes.
pub fn render(report: &GraphReport, config: &VisualizeConfig) -> Result<String> {
    let hub = views::hub_view(report, config)?;
    let clusters = views::cluster_view(report, config);
    let orphans = views::orphan_view(report, config)?;

    let mut doc = String::from("# Vault Link Graph\n\n");
    write_summary(&mut doc, report);
    write_section(
        &mut doc,
        "Hub View",
        "Top hubs and their most-referenced neighbours. Without hubs, the most-referenced documents stand in.",
        &hub,
    );
    write_section(
        &mut doc,
        "Directory Clusters",
        "Documents grouped by directory; large directories are collapsed.",
        &clusters,
    );
    write_section(
        &mut doc,
        "Orphaned Documents",
        "Documents with no links in or out. These need attention.",
        &orphans,
    );
    Ok(doc)
}

fn write_summary(doc: &mut String, report: &GraphReport) {
    let m = &report.metrics;
    let _ = writeln!(doc, "## Summary\n");
    let _ = writeln!(doc, "- Documents: {}", m.total_files);
    let _ = writeln!(doc, "- References: {} ({} resolved)", m.total_links, m.resolved_links);
    let _ = writeln!(doc, "- Orphans: {}", m.orphaned_files);
    let _ = writeln!(doc, "- Hubs: {}", m.hub_documents.len());
    let _ = writeln!(doc, "- Clusters: {} (largest: {})", m.clusters, m.largest_cluster);
    let _ = writeln!(doc, "- Average links per document: {:.2}", m.average_links_per_file);
    let _ = writeln!(doc);
    doc.push_str(&legend::render());
    doc.push('\n');
}

fn write_section(doc: &mut String, title: &str, blurb: &str, diagram: &str) {
    let _ = writeln!(doc, "## {title}\n\n{blurb}\n");
    let _ = writeln!(doc, "```mermaid\n{diagram}```\n");
    doc.push_str(&legend::render());
    doc.push('\n');
}
