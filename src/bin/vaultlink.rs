use clap::Parser;
use colored::Colorize;
use vaultlink_core::cli::{self, Cli};
use vaultlink_core::exit::VaultExit;
use vaultlink_core::logging;

fn main() -> VaultExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            VaultExit::Error
        }
    }
}
