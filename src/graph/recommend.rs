//! Free-text recommendations derived from the metrics.

use super::types::GraphMetrics;

const WEAK_SHARE_WARN: f64 = 0.30;
const MIN_AVERAGE_DENSITY: f64 = 3.0;
const MAX_CLUSTERS: usize = 10;

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate(metrics: &GraphMetrics) -> Vec<String> {
    let mut out = Vec::new();

    if metrics.orphaned_files > 0 {
        out.push(format!(
            "CRITICAL: {} orphaned documents have no links in or out; connect them to relevant hubs (see orphan report).",
            metrics.orphaned_files
        ));
    }

    if metrics.total_files > 0 {
        let weak_share = metrics.weakly_connected as f64 / metrics.total_files as f64;
        if weak_share > WEAK_SHARE_WARN {
            out.push(format!(
                "WARNING: {:.1}% of documents are weakly connected (a single link); add cross-references to strengthen them.",
                weak_share * 100.0
            ));
        }
    }

    if metrics.average_links_per_file < MIN_AVERAGE_DENSITY {
        out.push(format!(
            "INFO: average link density is {:.2} links per document; aim for at least {MIN_AVERAGE_DENSITY:.0}.",
            metrics.average_links_per_file
        ));
    }

    if metrics.clusters > MAX_CLUSTERS {
        out.push(format!(
            "SUGGESTION: the vault splits into {} disconnected clusters; add bridging links between related areas.",
            metrics.clusters
        ));
    }

    if out.is_empty() {
        out.push("Graph health looks good: no orphans and healthy link density.".to_string());
    }
    out
}
