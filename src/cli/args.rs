use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filescope", version, about = "Dependency graph and quality view for a single file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Read settings from this file instead of ./filescope.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the positioned dependency graph for a snapshot
    Graph {
        /// Snapshot JSON file, or `-` for stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Classify a snapshot's quality metrics
    Classify {
        /// Snapshot JSON file, or `-` for stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(long)]
        json: bool,
        /// Exit non-zero when the technical-debt alert fires
        #[arg(long)]
        strict: bool,
    },
    /// Full report: graph, tiers, activity and alerts
    Report {
        /// Snapshot JSON file, or `-` for stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
}
