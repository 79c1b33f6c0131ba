pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod document;
pub mod error;
pub mod exit;
pub mod graph;
pub mod logging;
pub mod orphans;
pub mod pipeline;
pub mod reporting;
pub mod scoring;
pub mod suggest;
pub mod visualize;
