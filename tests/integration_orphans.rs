// tests/integration_orphans.rs
//! Stage 2 over corpora with hubs and orphans in several directories.

mod common;

use common::{config, vault_owned, with_hub};
use vaultlink_core::graph;
use vaultlink_core::orphans::{self, Priority};

fn owned(files: &[(&str, &str)]) -> Vec<(String, String)> {
    files
        .iter()
        .map(|(p, c)| ((*p).to_string(), (*c).to_string()))
        .collect()
}

#[test]
fn same_directory_hub_ranks_first() -> anyhow::Result<()> {
    let mut files = owned(&[
        ("docs/hub.md", "---\ntitle: Hub\n---\n"),
        ("elsewhere/index.md", ""),
        ("docs/lost.md", "---\ntags: [misc]\n---\nno links\n"),
    ]);
    with_hub(&mut files, "docs/hub", "refs", 12);
    with_hub(&mut files, "elsewhere/index", "more", 12);
    let dir = vault_owned(&files);
    let cfg = config(&dir);

    let report = graph::build(&cfg)?;
    assert_eq!(report.hubs.len(), 2);
    let orphan_report = orphans::classify(&report, &cfg.orphans)?;

    assert_eq!(orphan_report.total_orphans, 1);
    let group = &orphan_report.orphans_by_directory[0];
    assert_eq!(group.directory, "docs");
    assert_eq!(group.priority, Priority::High);
    assert_eq!(group.files, vec!["docs/lost.md".to_string()]);
    assert_eq!(group.suggested_hubs[0].file, "docs/hub.md");
    assert!(group.suggested_hubs[0]
        .reasons
        .iter()
        .any(|r| r == "same directory"));
    Ok(())
}

#[test]
fn groups_sort_by_priority_then_size() -> anyhow::Result<()> {
    let files = owned(&[
        ("misc/a.md", ""),
        ("misc/b.md", ""),
        ("misc/c.md", ""),
        ("src/tool.md", ""),
        ("docs/one.md", ""),
        ("planning/x.md", ""),
        ("planning/y.md", ""),
        ("root-note.md", ""),
    ]);
    let dir = vault_owned(&files);
    let cfg = config(&dir);

    let report = graph::build(&cfg)?;
    let orphan_report = orphans::classify(&report, &cfg.orphans)?;

    let order: Vec<(&str, Priority)> = orphan_report
        .orphans_by_directory
        .iter()
        .map(|g| (g.directory.as_str(), g.priority))
        .collect();
    assert_eq!(
        order,
        vec![
            ("planning", Priority::High),
            ("docs", Priority::High),
            ("src", Priority::Medium),
            ("misc", Priority::Low),
            (".", Priority::Low),
        ]
    );
    assert_eq!(orphan_report.total_orphans, 8);

    let bucketed: usize = orphan_report
        .orphans_by_directory
        .iter()
        .map(|g| g.files.len())
        .sum();
    assert_eq!(bucketed, orphan_report.total_orphans);
    Ok(())
}

#[test]
fn quick_wins_by_name_or_tags() -> anyhow::Result<()> {
    let files = owned(&[
        ("misc/README.md", ""),
        ("misc/plain.md", ""),
        ("docs/tagged.md", "---\ntags: [api, design]\n---\n"),
        ("docs/single-tag.md", "---\ntags: [api]\n---\n"),
        ("misc/tagged.md", "---\ntags: [api, design]\n---\n"),
    ]);
    let dir = vault_owned(&files);
    let cfg = config(&dir);

    let report = graph::build(&cfg)?;
    let orphan_report = orphans::classify(&report, &cfg.orphans)?;

    assert_eq!(
        orphan_report.quick_wins,
        vec!["docs/tagged.md".to_string(), "misc/README.md".to_string()]
    );
    Ok(())
}

#[test]
fn no_hubs_means_no_suggestions() -> anyhow::Result<()> {
    let files = owned(&[("a.md", "[[b]]"), ("b.md", ""), ("docs/lost.md", "")]);
    let dir = vault_owned(&files);
    let cfg = config(&dir);

    let report = graph::build(&cfg)?;
    let orphan_report = orphans::classify(&report, &cfg.orphans)?;

    assert_eq!(orphan_report.orphans_by_directory.len(), 1);
    assert!(orphan_report.orphans_by_directory[0].suggested_hubs.is_empty());
    Ok(())
}

#[test]
fn unknown_orphan_is_rejected() -> anyhow::Result<()> {
    let dir = vault_owned(&owned(&[("a.md", "")]));
    let cfg = config(&dir);
    let mut report = graph::build(&cfg)?;
    report.orphans.push("ghost.md".to_string());

    assert!(orphans::classify(&report, &cfg.orphans).is_err());
    Ok(())
}
