use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::dashboard::FileReport;
use crate::graph::{GraphModel, NodeRole};
use crate::metrics::{
    Alert, Classification, ComplexityTier, CoverageLabel, MaintainabilityTier, Rollup, Severity,
    SmellSeverity,
};

/// Formats the dependency graph for terminal display.
#[must_use]
pub fn format_graph(graph: &GraphModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "─".repeat(70).dimmed());
    match graph.focal() {
        Some(focal) => {
            let _ = writeln!(
                out,
                "{} {} {}",
                "DEPENDENCY GRAPH".cyan().bold(),
                focal.file_path.white().bold(),
                format!("[{}]", focal.id).dimmed()
            );
        }
        None => {
            let _ = writeln!(out, "{}", "DEPENDENCY GRAPH".cyan().bold());
        }
    }
    let _ = writeln!(out, "{}", "─".repeat(70).dimmed());

    write_side(&mut out, graph, NodeRole::Dependency, "Imports");
    write_side(&mut out, graph, NodeRole::Dependent, "Imported by");

    let _ = writeln!(
        out,
        "\n   {} nodes | {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
    out
}

fn write_side(out: &mut String, graph: &GraphModel, role: NodeRole, title: &str) {
    let nodes: Vec<_> = graph.nodes_with_role(role).collect();
    let _ = writeln!(out, "\n{} ({})", title.yellow().bold(), nodes.len());
    if nodes.is_empty() {
        let _ = writeln!(out, "    {}", "(none)".dimmed());
        return;
    }

    for node in nodes {
        let arrow = match role {
            NodeRole::Dependency => "←",
            _ => "→",
        };
        let edge_type = graph
            .edges
            .iter()
            .find(|e| e.source == node.id || e.target == node.id)
            .and_then(|e| e.dependency_type.as_deref())
            .map(|t| format!(" ({t})"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "    {} {}{} {}",
            arrow.cyan(),
            display_path(&node.file_path),
            edge_type.dimmed(),
            format!("@ ({}, {})", node.position.x, node.position.y).dimmed()
        );
    }
}

fn display_path(path: &str) -> ColoredString {
    if path.is_empty() {
        "<unknown path>".red()
    } else {
        path.normal()
    }
}

/// Formats the metric classification for terminal display.
#[must_use]
pub fn format_classification(c: &Classification) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "QUALITY".cyan().bold());
    let _ = writeln!(
        out,
        "   Maintainability:  {}",
        maintainability_colored(c.maintainability_tier)
    );
    let _ = writeln!(
        out,
        "   Complexity:       {} ({:.0}% of ceiling)",
        complexity_colored(c.complexity_tier),
        c.complexity_percent
    );
    let coverage = match c.coverage_label {
        CoverageLabel::Good => c.coverage_label.label().green(),
        CoverageLabel::NeedsWork => c.coverage_label.label().yellow(),
    };
    let _ = writeln!(out, "   Coverage:         {coverage}");
    if c.smell_severity == SmellSeverity::High {
        let _ = writeln!(out, "   Code smells:      {}", "high".red());
    }

    let _ = writeln!(out, "\n{}", "RADAR".cyan().bold());
    for (label, value) in c.radar_vector.axes() {
        let _ = writeln!(out, "   {label:<16} {} {value:>5.1}", bar(value));
    }
    out
}

/// Renders a 0..=100 value as a 20-cell bar.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 100.0) / 5.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

fn complexity_colored(tier: ComplexityTier) -> ColoredString {
    match tier {
        ComplexityTier::Low => tier.label().green(),
        ComplexityTier::Medium => tier.label().yellow(),
        ComplexityTier::High => tier.label().red(),
    }
}

fn maintainability_colored(tier: MaintainabilityTier) -> ColoredString {
    match tier {
        MaintainabilityTier::Excellent => tier.label().green().bold(),
        MaintainabilityTier::Good => tier.label().green(),
        MaintainabilityTier::Fair => tier.label().yellow(),
        MaintainabilityTier::Poor => tier.label().red(),
    }
}

#[must_use]
pub fn format_rollup(rollup: &Rollup) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "ACTIVITY".cyan().bold());
    let _ = writeln!(
        out,
        "   Connections:      {} ({} in, {} out)",
        rollup.total_connections, rollup.dependent_count, rollup.dependency_count
    );
    let _ = writeln!(
        out,
        "   Commits:          {} (+{} / -{}, net {})",
        rollup.commit_count, rollup.total_additions, rollup.total_deletions, rollup.net_change
    );
    let _ = writeln!(
        out,
        "   Similar files:    {} (avg {:.2})",
        rollup.neighbor_count, rollup.average_similarity
    );
    if let Some(closest) = &rollup.closest_neighbor {
        let _ = writeln!(
            out,
            "   Closest:          {} ({:.2})",
            closest.file_path, closest.similarity
        );
    }
    if !rollup.dependency_types.is_empty() {
        let types: Vec<String> = rollup
            .dependency_types
            .iter()
            .map(|t| format!("{} {}", t.label, t.count))
            .collect();
        let _ = writeln!(out, "   Import kinds:     {}", types.join(", "));
    }
    out
}

#[must_use]
pub fn format_alerts(alerts: &[Alert]) -> String {
    let mut out = String::new();
    if alerts.is_empty() {
        return out;
    }

    let _ = writeln!(out, "{}", "ALERTS".cyan().bold());
    for alert in alerts {
        let tag = match alert.severity {
            Severity::Critical => alert.severity.label().red().bold(),
            Severity::Warning => alert.severity.label().yellow().bold(),
            Severity::Info => alert.severity.label().blue(),
            Severity::Positive => alert.severity.label().green().bold(),
        };
        let _ = writeln!(out, "   [{tag}] {}", alert.message);
    }
    out
}

/// Formats the full file report.
#[must_use]
pub fn format_report(report: &FileReport) -> String {
    let mut out = format_graph(&report.graph);
    let _ = writeln!(out);
    out.push_str(&format_classification(&report.classification));
    let _ = writeln!(out);
    out.push_str(&format_rollup(&report.rollup));
    let alerts = format_alerts(&report.alerts);
    if !alerts.is_empty() {
        let _ = writeln!(out);
        out.push_str(&alerts);
    }
    let _ = writeln!(out, "{}", "─".repeat(70).dimmed());
    out
}
