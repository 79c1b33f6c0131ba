// tests/integration_graph.rs
//! Stage 1 against real corpora on disk.

mod common;

use common::{config, vault};
use std::collections::BTreeSet;
use std::io::Write;
use std::sync::{Arc, Mutex};
use vaultlink_core::error::VaultError;
use vaultlink_core::{graph, orphans};

/// In-memory sink for a scoped `tracing` subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn three_document_corpus() -> anyhow::Result<()> {
    let dir = vault(&[
        ("x.md", "---\ntitle: X\ntags: [alpha]\n---\nLinks to [[y]].\n"),
        ("y.md", "---\ntitle: Y\n---\nNothing here.\n"),
        ("other/z.md", "---\ntitle: Z\ntags: [gamma]\n---\nAlone.\n"),
    ]);
    let report = graph::build(&config(&dir))?;

    assert_eq!(report.metrics.total_files, 3);
    assert_eq!(report.metrics.orphaned_files, 1);
    assert_eq!(report.orphans, vec!["other/z.md".to_string()]);
    assert!(report.metrics.hub_documents.is_empty());
    assert!(report.hubs.is_empty());
    assert_eq!(report.metrics.clusters, 2);
    assert_eq!(report.metrics.largest_cluster, 2);

    let y = report.node("y.md").expect("y");
    assert_eq!(y.inbound_references, vec!["x.md".to_string()]);
    assert_eq!(y.link_count, 1);
    assert!(!y.is_orphan);
    Ok(())
}

#[test]
fn malformed_metadata_keeps_document() -> anyhow::Result<()> {
    let dir = vault(&[("notes/broken.md", "---\ntitle: Never closed\ntags: [a]\nbody [[x]]\n")]);
    let logs = LogBuffer::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let report = tracing::subscriber::with_default(subscriber, || graph::build(&config(&dir)))?;

    let output = logs.contents();
    let warning = output
        .lines()
        .find(|l| l.contains("notes/broken.md"))
        .unwrap_or_default();
    assert!(warning.contains("WARN"), "no warning logged: {output}");
    assert!(warning.contains("malformed metadata block"));

    let node = report.node("notes/broken.md").expect("node present");
    assert!(node.tags.is_empty());
    assert_eq!(node.title, "notes/broken.md");
    assert_eq!(node.outbound_references, vec!["x".to_string()]);
    Ok(())
}

#[test]
fn resolution_is_symmetric() -> anyhow::Result<()> {
    let dir = vault(&[
        ("a.md", "[[docs/b]] [[c]] [[missing]] [[docs/b|again]]"),
        ("docs/b.md", "[[../a]] [[c#Section]]"),
        ("docs/c.md", "![[b]]"),
        ("c.md", "plain"),
    ]);
    let report = graph::build(&config(&dir))?;

    let mut edges = BTreeSet::new();
    for node in &report.nodes {
        for source in &node.inbound_references {
            edges.insert((source.clone(), node.relative_path.clone()));
        }
    }
    let expected: BTreeSet<(String, String)> = [
        ("a.md", "docs/b.md"),
        ("a.md", "c.md"),
        ("docs/b.md", "a.md"),
        ("docs/b.md", "c.md"),
        ("docs/c.md", "docs/b.md"),
    ]
    .iter()
    .map(|(s, t)| ((*s).to_string(), (*t).to_string()))
    .collect();
    assert_eq!(edges, expected);

    let cfg = config(&dir);
    let orphan_report = orphans::classify(&report, &cfg.orphans)?;
    let bucketed: BTreeSet<&str> = orphan_report
        .orphans_by_directory
        .iter()
        .flat_map(|g| g.files.iter().map(String::as_str))
        .collect();
    for (_, target) in &edges {
        assert!(!report.orphans.contains(target), "{target} listed as orphan");
        assert!(!bucketed.contains(target.as_str()), "{target} bucketed as orphan");
    }

    let resolved: usize = report.nodes.iter().map(|n| n.inbound_count()).sum();
    assert_eq!(report.metrics.resolved_links, resolved);
    assert_eq!(report.metrics.total_links, 7);
    Ok(())
}

#[test]
fn orphan_list_matches_flags() -> anyhow::Result<()> {
    let dir = vault(&[
        ("a.md", "[[b]]"),
        ("b.md", ""),
        ("c.md", ""),
        ("d.md", "[[nowhere]]"),
    ]);
    let report = graph::build(&config(&dir))?;

    let flagged: Vec<String> = report
        .nodes
        .iter()
        .filter(|n| n.is_orphan)
        .map(|n| n.relative_path.clone())
        .collect();
    assert_eq!(report.orphans, flagged);
    assert_eq!(report.orphans, vec!["c.md".to_string()]);
    for node in &report.nodes {
        assert_eq!(node.is_orphan, node.link_count == 0);
    }
    Ok(())
}

#[test]
fn clusters_partition_the_nodes() -> anyhow::Result<()> {
    let dir = vault(&[
        ("a.md", "[[b]]"),
        ("b.md", ""),
        ("c.md", "[[b]]"),
        ("p/d.md", "[[e]]"),
        ("p/e.md", ""),
        ("lonely.md", ""),
    ]);
    let report = graph::build(&config(&dir))?;

    assert_eq!(report.metrics.clusters, 3);
    assert_eq!(report.metrics.largest_cluster, 3);
    assert!(report.metrics.clusters <= report.metrics.total_files);
    Ok(())
}

#[test]
fn hubs_need_more_than_threshold() -> anyhow::Result<()> {
    let mut files: Vec<(String, String)> = vec![
        ("big.md".into(), String::new()),
        ("edge.md".into(), String::new()),
    ];
    common::with_hub(&mut files, "big", "a", 11);
    common::with_hub(&mut files, "edge", "b", 10);
    let dir = common::vault_owned(&files);

    let report = graph::build(&config(&dir))?;
    assert_eq!(report.hubs, vec!["big.md".to_string()]);
    assert_eq!(report.metrics.hub_documents[0].inbound_links, 11);
    Ok(())
}

#[test]
fn excluded_and_non_document_files_are_ignored() -> anyhow::Result<()> {
    let dir = vault(&[
        ("a.md", "[[hidden/b]]"),
        (".obsidian/b.md", ""),
        ("image.png", "binary"),
        (".vaultlink/graph-visualization.md", "[[a]]"),
    ]);
    let report = graph::build(&config(&dir))?;

    assert_eq!(report.metrics.total_files, 1);
    let a = report.node("a.md").expect("a");
    assert!(a.inbound_references.is_empty());
    assert!(!a.is_orphan);
    Ok(())
}

#[test]
fn undecodable_file_is_skipped() -> anyhow::Result<()> {
    let dir = vault(&[("good.md", "[[good]]")]);
    std::fs::write(dir.path().join("bad.md"), [0xff, 0xfe, 0x00, 0xc3])?;
    let report = graph::build(&config(&dir))?;

    assert_eq!(report.metrics.total_files, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].file, "bad.md");
    Ok(())
}

#[test]
fn empty_corpus_is_valid() -> anyhow::Result<()> {
    let dir = vault(&[]);
    let report = graph::build(&config(&dir))?;

    assert_eq!(report.metrics.total_files, 0);
    assert_eq!(report.metrics.clusters, 0);
    assert!(report.metrics.average_links_per_file.abs() < f64::EPSILON);
    assert!(!report.recommendations.is_empty());
    Ok(())
}

#[test]
fn missing_root_is_fatal() {
    let dir = vault(&[]);
    let cfg = vaultlink_core::config::Config::new(dir.path().join("does-not-exist"));
    let result = graph::build(&cfg);
    assert!(matches!(result, Err(VaultError::RootUnreadable { .. })));
}
