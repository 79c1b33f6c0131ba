use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vaultlink",
    version,
    about = "Link-graph analysis for markdown vaults"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Corpus root to scan
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
    /// Config file (defaults to vaultlink.toml in the root, if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Artifact directory (overrides [output].dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run every stage and write all artifacts
    Analyze,
    /// Build the link graph and print its metrics
    Graph {
        #[arg(long)]
        json: bool,
    },
    /// Group orphans by directory and propose hubs
    Orphans {
        #[arg(long)]
        json: bool,
    },
    /// Suggest link targets for orphans
    Suggest {
        #[arg(long)]
        json: bool,
        /// Only this orphan (path relative to the root)
        #[arg(long, value_name = "PATH")]
        orphan: Option<String>,
    },
    /// Render the Mermaid visualization
    Visualize {
        /// Print instead of writing graph-visualization.md
        #[arg(long, short)]
        stdout: bool,
    },
}
