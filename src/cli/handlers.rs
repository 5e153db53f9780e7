// src/cli/handlers.rs
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::dashboard;
use crate::error::FilescopeError;
use crate::exit::FilescopeExit;
use crate::graph;
use crate::metrics;
use crate::reporting;
use crate::snapshot;
use crate::types::FileSnapshot;

/// Loads the snapshot, turning unparseable input into an exit code rather
/// than an error.
fn load_snapshot(input: &Path) -> Result<std::result::Result<FileSnapshot, FilescopeExit>> {
    match snapshot::load(input) {
        Ok(snap) => Ok(Ok(snap)),
        Err(e) if e.is_invalid_input() => {
            eprintln!("{} {}", "Invalid input:".red(), e);
            Ok(Err(FilescopeExit::InvalidInput))
        }
        Err(e) => Err(e.into()),
    }
}

/// Handles the graph command.
///
/// # Errors
/// Returns error if the snapshot cannot be read.
pub fn handle_graph(config: &Config, input: &Path, json: bool) -> Result<FilescopeExit> {
    let snap = match load_snapshot(input)? {
        Ok(snap) => snap,
        Err(code) => return Ok(code),
    };

    let model = graph::build_with(
        &config.layout_config(),
        &snap.current_file,
        &snap.dependencies,
        &snap.dependents,
    );
    debug!(nodes = model.nodes.len(), edges = model.edges.len(), "built graph");

    if json {
        println!("{}", reporting::format_json(&model)?);
    } else {
        print!("{}", reporting::format_graph(&model));
    }
    Ok(FilescopeExit::Success)
}

/// Handles the classify command.
///
/// # Errors
/// Returns error if the snapshot cannot be read.
pub fn handle_classify(
    config: &Config,
    input: &Path,
    json: bool,
    strict: bool,
) -> Result<FilescopeExit> {
    let snap = match load_snapshot(input)? {
        Ok(snap) => snap,
        Err(code) => return Ok(code),
    };

    let classification = metrics::classify(&snap.metrics);
    let alerts = metrics::alerts(&classification, &snap.metrics);

    if json {
        println!("{}", reporting::format_json(&classification)?);
    } else {
        print!("{}", reporting::format_classification(&classification));
        print!("{}", reporting::format_alerts(&alerts));
    }

    Ok(debt_exit(classification.debt_alert, strict || config.report.fail_on_debt))
}

/// Handles the report command.
///
/// # Errors
/// Returns error if the snapshot cannot be read.
pub fn handle_report(config: &Config, input: &Path, json: bool) -> Result<FilescopeExit> {
    let snap = match load_snapshot(input)? {
        Ok(snap) => snap,
        Err(code) => return Ok(code),
    };

    let report = dashboard::analyze_with(&config.layout_config(), &snap);
    info!(file = %report.file_path, alerts = report.alerts.len(), "analyzed snapshot");

    if json {
        println!("{}", reporting::format_json(&report)?);
    } else {
        print!("{}", reporting::format_report(&report));
    }

    Ok(debt_exit(report.has_debt_alert(), config.report.fail_on_debt))
}

fn debt_exit(debt_alert: bool, enforce: bool) -> FilescopeExit {
    if debt_alert && enforce {
        FilescopeExit::AlertRaised
    } else {
        FilescopeExit::Success
    }
}

/// Resolves the configuration for this run.
///
/// # Errors
/// Returns error if an explicitly named config file is unreadable.
pub fn resolve_config(explicit: Option<&Path>) -> std::result::Result<Config, FilescopeError> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Ok(Config::load()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_exit_needs_both() {
        assert_eq!(debt_exit(true, true), FilescopeExit::AlertRaised);
        assert_eq!(debt_exit(true, false), FilescopeExit::Success);
        assert_eq!(debt_exit(false, true), FilescopeExit::Success);
    }

    #[test]
    fn test_resolve_config_reads_named_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[report]\nfail_on_debt = true\n").unwrap();
        let config = resolve_config(Some(&path)).unwrap();
        assert!(config.report.fail_on_debt);

        let missing = resolve_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(missing, Err(FilescopeError::Io { .. })));
    }
}
