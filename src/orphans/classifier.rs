//! Groups orphans by directory and proposes hubs to link them to.

use std::collections::{BTreeMap, BTreeSet};

use super::priority;
use super::types::{HubSuggestion, OrphanGroup, OrphanReport};
use crate::config::OrphanConfig;
use crate::document::keywords::{directory_keywords, file_stem, is_nested_dir, stem_keywords};
use crate::error::Result;
use crate::graph::metrics::round2;
use crate::graph::{DocumentNode, GraphReport};
use crate::scoring::{self, count, flag, Rule};

/// A bucket representative scored against one hub.
pub struct HubPair<'a> {
    pub orphan: &'a DocumentNode,
    pub hub: &'a DocumentNode,
    orphan_dir_words: BTreeSet<String>,
    hub_dir_words: BTreeSet<String>,
    orphan_name_words: BTreeSet<String>,
    hub_name_words: BTreeSet<String>,
}

impl<'a> HubPair<'a> {
    #[must_use]
    pub fn new(orphan: &'a DocumentNode, hub: &'a DocumentNode) -> Self {
        Self {
            orphan,
            hub,
            orphan_dir_words: directory_keywords(&orphan.relative_path),
            hub_dir_words: directory_keywords(&hub.relative_path),
            orphan_name_words: stem_keywords(&orphan.relative_path),
            hub_name_words: stem_keywords(&hub.relative_path),
        }
    }

    fn shared_dir_words(&self) -> usize {
        self.orphan_dir_words.intersection(&self.hub_dir_words).count()
    }

    fn shared_tags(&self) -> usize {
        shared_tag_count(&self.orphan.tags, &self.hub.tags)
    }

    fn shared_name_words(&self) -> usize {
        self.orphan_name_words.intersection(&self.hub_name_words).count()
    }
}

/// Hub-affinity rules for orphan buckets.
#[must_use]
pub fn hub_rules<'a>() -> Vec<Rule<HubPair<'a>>> {
    vec![
        Rule {
            name: "same_directory",
            weight: 10.0,
            measure: |p| flag(p.orphan.directory == p.hub.directory),
            describe: |_, _| "same directory".to_string(),
        },
        Rule {
            name: "nested_directory",
            weight: 5.0,
            measure: |p| flag(is_nested_dir(&p.orphan.directory, &p.hub.directory)),
            describe: |_, _| "parent/child directory".to_string(),
        },
        Rule {
            name: "path_keywords",
            weight: 2.0,
            measure: |p| count(p.shared_dir_words()),
            describe: |_, n| format!("{n} shared path keyword(s)"),
        },
        Rule {
            name: "shared_tags",
            weight: 3.0,
            measure: |p| count(p.shared_tags()),
            describe: |_, n| format!("{n} shared tag(s)"),
        },
        Rule {
            name: "name_keywords",
            weight: 1.0,
            measure: |p| count(p.shared_name_words()),
            describe: |_, n| format!("{n} shared filename keyword(s)"),
        },
    ]
}

/// Builds the Orphan Report from a Graph Report.
///
/// # Errors
/// Returns `InconsistentReport` if the orphan or hub lists name unknown nodes.
pub fn classify(report: &GraphReport, config: &OrphanConfig) -> Result<OrphanReport> {
    let orphans = report.orphan_nodes()?;
    let hubs = report.hub_nodes()?;

    let mut buckets: BTreeMap<&str, Vec<&DocumentNode>> = BTreeMap::new();
    for orphan in orphans.iter().copied() {
        buckets.entry(orphan.directory.as_str()).or_default().push(orphan);
    }

    let mut groups: Vec<OrphanGroup> = buckets
        .into_iter()
        .map(|(directory, members)| {
            let suggested_hubs = members
                .first()
                .map(|rep| suggest_hubs(rep, &hubs, config.max_suggested_hubs))
                .unwrap_or_default();
            OrphanGroup {
                directory: display_dir(directory),
                files: members.iter().map(|n| n.relative_path.clone()).collect(),
                suggested_hubs,
                priority: priority::for_directory(directory, config),
            }
        })
        .collect();

    groups.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.files.len().cmp(&a.files.len()))
            .then_with(|| a.directory.cmp(&b.directory))
    });

    let quick_wins = orphans
        .iter()
        .filter(|n| is_quick_win(n, config))
        .map(|n| n.relative_path.clone())
        .collect();

    Ok(OrphanReport {
        total_orphans: orphans.len(),
        orphans_by_directory: groups,
        quick_wins,
    })
}

fn suggest_hubs(
    representative: &DocumentNode,
    hubs: &[&DocumentNode],
    limit: usize,
) -> Vec<HubSuggestion> {
    let rules = hub_rules();
    let mut scored: Vec<HubSuggestion> = hubs
        .iter()
        .filter_map(|hub| {
            let score = scoring::evaluate(&rules, &HubPair::new(representative, hub));
            (score.total > 0.0).then(|| HubSuggestion {
                file: hub.relative_path.clone(),
                score: round2(score.total),
                reasons: score.reasons(),
            })
        })
        .collect();

    scoring::rank_by_score(&mut scored, |s| s.score, |s| s.file.clone());
    scored.truncate(limit);
    scored
}

/// Orphans that should be easy to connect: tag-rich in a high-priority
/// directory, or named like canonical documentation.
#[must_use]
pub fn is_quick_win(node: &DocumentNode, config: &OrphanConfig) -> bool {
    let tag_rich = node.tags.len() >= 2
        && priority::for_directory(&node.directory, config) == super::Priority::High;
    let stem = file_stem(&node.relative_path);
    let canonical_name = config
        .quick_win_names
        .iter()
        .any(|n| stem.contains(&n.to_lowercase()));
    tag_rich || canonical_name
}

pub(crate) fn shared_tag_count(a: &[String], b: &[String]) -> usize {
    let a: BTreeSet<String> = a.iter().map(|t| t.to_lowercase()).collect();
    b.iter()
        .map(|t| t.to_lowercase())
        .collect::<BTreeSet<_>>()
        .intersection(&a)
        .count()
}

fn display_dir(directory: &str) -> String {
    if directory.is_empty() {
        ".".to_string()
    } else {
        directory.to_string()
    }
}
