//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_classify, handle_graph, handle_report},
};
use crate::config::Config;
use crate::exit::FilescopeExit;
use anyhow::Result;

/// Executes the parsed command against an already resolved config.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config: &Config) -> Result<FilescopeExit> {
    match command {
        Commands::Graph { input, json } => handle_graph(config, &input, json),
        Commands::Classify {
            input,
            json,
            strict,
        } => handle_classify(config, &input, json, strict),
        Commands::Report { input, json } => handle_report(config, &input, json),
    }
}
