use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_OUTPUT_DIR, DOC_EXTENSION, PROBE_DIRS, PRUNE_DIRS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    #[serde(default = "default_probe_dirs")]
    pub probe_dirs: Vec<String>,
    /// Resolve bare note names against a unique file stem anywhere in the vault.
    #[serde(default)]
    pub resolve_by_name: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            probe_dirs: default_probe_dirs(),
            resolve_by_name: false,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![DOC_EXTENSION.to_string()]
}
fn default_exclude_dirs() -> Vec<String> {
    PRUNE_DIRS.iter().map(|s| (*s).to_string()).collect()
}
fn default_probe_dirs() -> Vec<String> {
    PROBE_DIRS.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// A node is a hub when its inbound count is strictly greater than this.
    #[serde(default = "default_hub_inbound")]
    pub hub_inbound_threshold: usize,
    #[serde(default = "default_max_hubs")]
    pub max_hubs: usize,
    #[serde(default = "default_well_connected")]
    pub well_connected_min: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            hub_inbound_threshold: default_hub_inbound(),
            max_hubs: default_max_hubs(),
            well_connected_min: default_well_connected(),
        }
    }
}

const fn default_hub_inbound() -> usize { 10 }
const fn default_max_hubs() -> usize { 10 }
const fn default_well_connected() -> usize { 5 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrphanConfig {
    #[serde(default = "default_max_suggested_hubs")]
    pub max_suggested_hubs: usize,
    #[serde(default = "default_high_dirs")]
    pub high_priority_dirs: Vec<String>,
    #[serde(default = "default_medium_dirs")]
    pub medium_priority_dirs: Vec<String>,
    #[serde(default = "default_quick_win_names")]
    pub quick_win_names: Vec<String>,
}

impl Default for OrphanConfig {
    fn default() -> Self {
        Self {
            max_suggested_hubs: default_max_suggested_hubs(),
            high_priority_dirs: default_high_dirs(),
            medium_priority_dirs: default_medium_dirs(),
            quick_win_names: default_quick_win_names(),
        }
    }
}

const fn default_max_suggested_hubs() -> usize { 3 }

fn default_high_dirs() -> Vec<String> {
    [
        "docs",
        "doc",
        "documentation",
        "planning",
        "plans",
        "decisions",
        "architecture",
        "concepts",
        "guides",
        "features",
        "meta",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn default_medium_dirs() -> Vec<String> {
    ["src", "source", "code", "lib", "scripts", "tests", "test", "examples"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_quick_win_names() -> Vec<String> {
    vec!["readme".into(), "guide".into(), "overview".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Candidates with at least this many links earn the hub bonus.
    #[serde(default = "default_hub_link_count")]
    pub hub_link_count: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            hub_link_count: default_hub_link_count(),
        }
    }
}

const fn default_top_n() -> usize { 5 }
const fn default_hub_link_count() -> usize { 10 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeConfig {
    #[serde(default = "default_top_hubs")]
    pub top_hubs: usize,
    #[serde(default = "default_neighbors_per_hub")]
    pub neighbors_per_hub: usize,
    #[serde(default = "default_max_directories")]
    pub max_directories: usize,
    #[serde(default = "default_nodes_per_directory")]
    pub nodes_per_directory: usize,
    #[serde(default = "default_max_edges")]
    pub max_edges: usize,
    #[serde(default = "default_max_orphans")]
    pub max_orphans: usize,
    /// Inbound count at which a node is drawn in the hub tier.
    #[serde(default = "default_hub_tier_inbound")]
    pub hub_tier_inbound: usize,
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            top_hubs: default_top_hubs(),
            neighbors_per_hub: default_neighbors_per_hub(),
            max_directories: default_max_directories(),
            nodes_per_directory: default_nodes_per_directory(),
            max_edges: default_max_edges(),
            max_orphans: default_max_orphans(),
            hub_tier_inbound: default_hub_tier_inbound(),
        }
    }
}

const fn default_top_hubs() -> usize { 5 }
const fn default_neighbors_per_hub() -> usize { 5 }
const fn default_max_directories() -> usize { 10 }
const fn default_nodes_per_directory() -> usize { 15 }
const fn default_max_edges() -> usize { 50 }
const fn default_max_orphans() -> usize { 20 }
const fn default_hub_tier_inbound() -> usize { 10 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Artifact directory, relative to the corpus root unless absolute.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// On-disk shape of `vaultlink.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VaultToml {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub orphans: OrphanConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub visualize: VisualizeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub scan: ScanConfig,
    pub graph: GraphConfig,
    pub orphans: OrphanConfig,
    pub suggest: SuggestConfig,
    pub visualize: VisualizeConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(PathBuf::from("."), VaultToml::default())
    }
}

impl Config {
    #[must_use]
    pub fn from_toml(root: PathBuf, toml: VaultToml) -> Self {
        Self {
            root,
            scan: toml.scan,
            graph: toml.graph,
            orphans: toml.orphans,
            suggest: toml.suggest,
            visualize: toml.visualize,
            output: toml.output,
        }
    }
}
