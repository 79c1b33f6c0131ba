//! Weighted rules for (orphan, candidate) pairs.

use std::collections::BTreeSet;

use crate::document::keywords::{file_stem, is_nested_dir, jaccard, path_keywords};
use crate::graph::DocumentNode;
use crate::orphans::classifier::shared_tag_count;
use crate::scoring::{count, flag, Rule};

/// Keyword sets derived once per node.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub path_keywords: BTreeSet<String>,
    pub body_keywords: BTreeSet<String>,
    pub stem: String,
}

impl Profile {
    #[must_use]
    pub fn of(node: &DocumentNode) -> Self {
        Self {
            path_keywords: path_keywords(&node.relative_path),
            body_keywords: node.body_keywords.iter().cloned().collect(),
            stem: file_stem(&node.relative_path),
        }
    }

    /// Path and body keywords together, sorted.
    #[must_use]
    pub fn all_keywords(&self) -> Vec<String> {
        self.path_keywords
            .union(&self.body_keywords)
            .cloned()
            .collect()
    }
}

pub struct SuggestionPair<'a> {
    pub orphan: &'a DocumentNode,
    pub candidate: &'a DocumentNode,
    pub orphan_profile: &'a Profile,
    pub candidate_profile: &'a Profile,
    pub hub_link_count: usize,
}

impl SuggestionPair<'_> {
    fn names_overlap(&self) -> bool {
        let a = &self.orphan_profile.stem;
        let b = &self.candidate_profile.stem;
        !a.is_empty() && !b.is_empty() && (a.contains(b.as_str()) || b.contains(a.as_str()))
    }
}

#[must_use]
pub fn suggestion_rules<'a>() -> Vec<Rule<SuggestionPair<'a>>> {
    vec![
        Rule {
            name: "same_directory",
            weight: 20.0,
            measure: |p| flag(p.orphan.directory == p.candidate.directory),
            describe: |_, _| "same directory".to_string(),
        },
        Rule {
            name: "nested_directory",
            weight: 10.0,
            measure: |p| flag(is_nested_dir(&p.orphan.directory, &p.candidate.directory)),
            describe: |_, _| "related directory".to_string(),
        },
        Rule {
            name: "shared_tags",
            weight: 5.0,
            measure: |p| count(shared_tag_count(&p.orphan.tags, &p.candidate.tags)),
            describe: |_, n| format!("{n} shared tag(s)"),
        },
        Rule {
            name: "path_similarity",
            weight: 15.0,
            measure: |p| jaccard(&p.orphan_profile.path_keywords, &p.candidate_profile.path_keywords),
            describe: |_, sim| format!("path similarity {:.0}%", sim * 100.0),
        },
        Rule {
            name: "content_similarity",
            weight: 15.0,
            measure: |p| jaccard(&p.orphan_profile.body_keywords, &p.candidate_profile.body_keywords),
            describe: |_, sim| format!("content similarity {:.0}%", sim * 100.0),
        },
        Rule {
            name: "hub_bonus",
            weight: 10.0,
            measure: |p| flag(p.candidate.link_count >= p.hub_link_count),
            describe: |p, _| format!("hub document ({} links)", p.candidate.link_count),
        },
        Rule {
            name: "name_overlap",
            weight: 5.0,
            measure: |p| flag(p.names_overlap()),
            describe: |_, _| "related filename".to_string(),
        },
    ]
}
