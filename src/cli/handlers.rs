// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::Config;
use crate::constants::VISUALIZATION_FILE;
use crate::error::VaultError;
use crate::exit::VaultExit;
use crate::graph::{self, GraphReport};
use crate::pipeline::{self, PipelineOutcome};
use crate::reporting;
use crate::{orphans, suggest, visualize};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

/// Loads the config for the requested root and applies CLI overrides.
///
/// # Errors
/// Returns error if the config file is missing or malformed.
pub fn load_config(cli: &Cli) -> std::result::Result<Config, VaultError> {
    let mut config = Config::load(&cli.root, cli.config.as_deref())?;
    if let Some(dir) = &cli.output {
        config.output.dir.clone_from(dir);
    }
    Ok(config)
}

/// Handles the analyze command.
///
/// # Errors
/// Returns error if the corpus root cannot be read.
pub fn handle_analyze(config: &Config) -> Result<VaultExit> {
    let outcome = pipeline::run(config)
        .with_context(|| format!("analyzing {}", config.root.display()))?;
    reporting::print_outcome(&outcome);
    Ok(exit_for(&outcome))
}

/// Handles the graph command.
///
/// # Errors
/// Returns error if the corpus root cannot be read or serialization fails.
pub fn handle_graph(config: &Config, json: bool) -> Result<VaultExit> {
    let report = build_graph(config)?;
    if json {
        print!("{}", pipeline::to_json(&report)?);
    } else {
        reporting::print_graph(&report);
    }
    Ok(VaultExit::Success)
}

/// Handles the orphans command.
///
/// # Errors
/// Returns error if the graph cannot be built or classified.
pub fn handle_orphans(config: &Config, json: bool) -> Result<VaultExit> {
    let report = build_graph(config)?;
    let orphans = orphans::classify(&report, &config.orphans)?;
    if json {
        print!("{}", pipeline::to_json(&orphans)?);
    } else {
        reporting::print_orphans(&orphans);
    }
    Ok(VaultExit::Success)
}

/// Handles the suggest command.
///
/// # Errors
/// Returns error if the graph cannot be built or `orphan` is not an orphan.
pub fn handle_suggest(config: &Config, json: bool, orphan: Option<&str>) -> Result<VaultExit> {
    let report = build_graph(config)?;
    let suggestions = match orphan {
        Some(path) => {
            let Some(entry) = suggest::suggest_for(&report, path, &config.suggest) else {
                eprintln!("{} `{path}` is not an orphaned document", "Error:".red());
                return Ok(VaultExit::InvalidInput);
            };
            suggest::SuggestionReport {
                total_orphans: 1,
                suggestions: vec![entry],
            }
        }
        None => suggest::suggest(&report, &config.suggest)?,
    };

    if json {
        print!("{}", pipeline::to_json(&suggestions)?);
    } else {
        reporting::print_suggestions(&suggestions);
    }
    Ok(VaultExit::Success)
}

/// Handles the visualize command.
///
/// # Errors
/// Returns error if the graph cannot be built or the output cannot be written.
pub fn handle_visualize(config: &Config, stdout: bool) -> Result<VaultExit> {
    let report = build_graph(config)?;
    let doc = visualize::render(&report, &config.visualize)?;
    if stdout {
        print!("{doc}");
        return Ok(VaultExit::Success);
    }

    let dir = config.output_dir();
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(VISUALIZATION_FILE);
    fs::write(&path, doc).with_context(|| format!("writing {}", path.display()))?;
    println!("{} {}", "✓ Wrote".green(), path.display());
    Ok(VaultExit::Success)
}

fn build_graph(config: &Config) -> Result<GraphReport> {
    graph::build(config).with_context(|| format!("scanning {}", config.root.display()))
}

fn exit_for(outcome: &PipelineOutcome) -> VaultExit {
    if outcome.is_complete() {
        VaultExit::Success
    } else {
        VaultExit::StageFailed
    }
}
