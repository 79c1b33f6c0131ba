// src/pipeline.rs
//! Sequences the four stages. Stage 1 feeds the other three; a failure in
//! one downstream stage does not stop the others.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::constants::{
    GRAPH_REPORT_FILE, ORPHAN_REPORT_FILE, SUGGESTION_REPORT_FILE, VISUALIZATION_FILE,
};
use crate::error::{Result, VaultError};
use crate::graph::{self, GraphReport};
use crate::orphans::{self, OrphanReport};
use crate::suggest::{self, SuggestionReport};
use crate::visualize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Graph,
    Orphans,
    Suggestions,
    Visualization,
}

impl Stage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Graph => "graph builder",
            Self::Orphans => "orphan classifier",
            Self::Suggestions => "connection suggester",
            Self::Visualization => "visualizer",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StageFailure {
    pub stage: Stage,
    pub error: String,
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub graph: GraphReport,
    pub orphans: Option<OrphanReport>,
    pub suggestions: Option<SuggestionReport>,
    pub visualization: Option<String>,
    pub failures: Vec<StageFailure>,
    pub written: Vec<PathBuf>,
}

impl PipelineOutcome {
    /// True when no stage or artifact write failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs all stages in memory without writing anything.
///
/// # Errors
/// Returns error only if stage 1 cannot read the corpus root.
pub fn analyze(config: &Config) -> Result<PipelineOutcome> {
    let graph = graph::build(config)?;
    let mut failures = Vec::new();

    let orphans = run_stage(Stage::Orphans, &mut failures, || {
        orphans::classify(&graph, &config.orphans)
    });
    let suggestions = run_stage(Stage::Suggestions, &mut failures, || {
        suggest::suggest(&graph, &config.suggest)
    });
    let visualization = run_stage(Stage::Visualization, &mut failures, || {
        visualize::render(&graph, &config.visualize)
    });

    Ok(PipelineOutcome {
        graph,
        orphans,
        suggestions,
        visualization,
        failures,
        written: Vec::new(),
    })
}

/// Runs all stages and writes every derivable artifact to the output
/// directory.
///
/// # Errors
/// Returns error only if stage 1 cannot read the corpus root.
pub fn run(config: &Config) -> Result<PipelineOutcome> {
    let config = &config.canonicalized()?;
    let mut outcome = analyze(config)?;
    write_artifacts(&mut outcome, &config.output_dir());
    Ok(outcome)
}

/// Writes the artifacts that exist on `outcome`. Write errors are recorded as
/// failures of the stage that produced the artifact.
pub fn write_artifacts(outcome: &mut PipelineOutcome, dir: &Path) {
    let mut writes: Vec<(Stage, PathBuf, Result<String>)> = vec![(
        Stage::Graph,
        dir.join(GRAPH_REPORT_FILE),
        to_json(&outcome.graph),
    )];
    if let Some(report) = &outcome.orphans {
        writes.push((Stage::Orphans, dir.join(ORPHAN_REPORT_FILE), to_json(report)));
    }
    if let Some(report) = &outcome.suggestions {
        writes.push((
            Stage::Suggestions,
            dir.join(SUGGESTION_REPORT_FILE),
            to_json(report),
        ));
    }
    if let Some(doc) = &outcome.visualization {
        writes.push((
            Stage::Visualization,
            dir.join(VISUALIZATION_FILE),
            Ok(doc.clone()),
        ));
    }

    for (stage, path, content) in writes {
        match content.and_then(|c| write_file(&path, &c)) {
            Ok(()) => {
                tracing::info!(file = %path.display(), "wrote artifact");
                outcome.written.push(path);
            }
            Err(e) => {
                tracing::warn!(stage = stage.label(), error = %e, "could not write artifact");
                outcome.failures.push(StageFailure {
                    stage,
                    error: e.to_string(),
                });
            }
        }
    }
}

/// Pretty JSON with a trailing newline.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| VaultError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| VaultError::io(path, e))
}

fn run_stage<T>(
    stage: Stage,
    failures: &mut Vec<StageFailure>,
    f: impl FnOnce() -> Result<T>,
) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(stage = stage.label(), error = %e, "stage failed");
            failures.push(StageFailure {
                stage,
                error: e.to_string(),
            });
            None
        }
    }
}
