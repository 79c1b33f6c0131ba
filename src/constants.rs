// src/constants.rs
//! Fixed names and defaults shared across the pipeline.

/// Directories never descended into during a corpus scan.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".obsidian",
    ".trash",
    "node_modules",
    ".venv",
    "target",
    ".vaultlink",
];

/// Conventional subdirectories probed when a reference resolves neither from
/// the corpus root nor from the referencing document's directory.
pub const PROBE_DIRS: &[&str] = &[
    "concepts",
    "decisions",
    "planning",
    "docs",
    "notes",
    "features",
    "architecture",
];

pub const DOC_EXTENSION: &str = "md";

pub const GRAPH_REPORT_FILE: &str = "graph-report.json";
pub const ORPHAN_REPORT_FILE: &str = "orphan-report.json";
pub const SUGGESTION_REPORT_FILE: &str = "suggestion-report.json";
pub const VISUALIZATION_FILE: &str = "graph-visualization.md";

pub const CONFIG_FILE: &str = "vaultlink.toml";
pub const DEFAULT_OUTPUT_DIR: &str = ".vaultlink";
