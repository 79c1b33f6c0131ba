//! Ranked link-target suggestions for every orphan.

pub mod rules;
pub mod types;

pub use rules::{suggestion_rules, Profile, SuggestionPair};
pub use types::{Confidence, OrphanSuggestions, SuggestedConnection, SuggestionReport};

use crate::config::SuggestConfig;
use crate::error::Result;
use crate::graph::metrics::round2;
use crate::graph::{DocumentNode, GraphReport};
use crate::scoring;

/// Scores every connected node against every orphan.
///
/// # Errors
/// Returns `InconsistentReport` if the orphan list names unknown nodes.
pub fn suggest(report: &GraphReport, config: &SuggestConfig) -> Result<SuggestionReport> {
    let orphans = report.orphan_nodes()?;
    let candidates = profiled_candidates(report);

    let suggestions: Vec<OrphanSuggestions> = orphans
        .iter()
        .map(|orphan| suggest_one(orphan, &candidates, config))
        .collect();

    Ok(SuggestionReport {
        total_orphans: orphans.len(),
        suggestions,
    })
}

/// Suggestions for a single orphan, or `None` if `relative_path` is not an
/// orphan in this report.
#[must_use]
pub fn suggest_for(
    report: &GraphReport,
    relative_path: &str,
    config: &SuggestConfig,
) -> Option<OrphanSuggestions> {
    let orphan = report.node(relative_path).filter(|n| n.is_orphan)?;
    let candidates = profiled_candidates(report);
    Some(suggest_one(orphan, &candidates, config))
}

fn profiled_candidates(report: &GraphReport) -> Vec<(&DocumentNode, Profile)> {
    report
        .connected_nodes()
        .map(|n| (n, Profile::of(n)))
        .collect()
}

fn suggest_one(
    orphan: &DocumentNode,
    candidates: &[(&DocumentNode, Profile)],
    config: &SuggestConfig,
) -> OrphanSuggestions {
    let orphan_profile = Profile::of(orphan);
    let rules = suggestion_rules();

    let mut connections: Vec<SuggestedConnection> = candidates
        .iter()
        .filter(|(candidate, _)| candidate.relative_path != orphan.relative_path)
        .filter_map(|(candidate, profile)| {
            let pair = SuggestionPair {
                orphan,
                candidate,
                orphan_profile: &orphan_profile,
                candidate_profile: profile,
                hub_link_count: config.hub_link_count,
            };
            let score = scoring::evaluate(&rules, &pair);
            let rounded = round2(score.total);
            (rounded > 0.0).then(|| SuggestedConnection {
                target_file: candidate.relative_path.clone(),
                reason: score.reasons().join("; "),
                confidence: Confidence::from_score(rounded),
                score: rounded,
            })
        })
        .collect();

    scoring::rank_by_score(&mut connections, |c| c.score, |c| c.target_file.clone());
    connections.truncate(config.top_n);

    OrphanSuggestions {
        orphan_file: orphan.relative_path.clone(),
        suggested_connections: connections,
        keywords: orphan_profile.all_keywords(),
        tags: orphan.tags.clone(),
    }
}
