//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands};
use super::handlers::{
    handle_analyze, handle_graph, handle_orphans, handle_suggest, handle_visualize, load_config,
};
use crate::exit::VaultExit;
use anyhow::Result;
use colored::Colorize;

/// Executes the parsed command line. No subcommand means `analyze`.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: Cli) -> Result<VaultExit> {
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            return Ok(VaultExit::InvalidInput);
        }
    };

    match cli.command.unwrap_or(Commands::Analyze) {
        Commands::Analyze => handle_analyze(&config),
        Commands::Graph { json } => handle_graph(&config, json),
        Commands::Orphans { json } => handle_orphans(&config, json),
        Commands::Suggest { json, orphan } => handle_suggest(&config, json, orphan.as_deref()),
        Commands::Visualize { stdout } => handle_visualize(&config, stdout),
    }
}
