// src/dashboard.rs
//! Combines the graph and metric views for one file snapshot.

use serde::{Deserialize, Serialize};

use crate::graph::{self, GraphModel, LayoutConfig};
use crate::metrics::{self, Alert, Classification, Rollup};
use crate::types::FileSnapshot;

/// Everything the dashboard renders for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file_path: String,
    pub graph: GraphModel,
    pub classification: Classification,
    pub rollup: Rollup,
    pub alerts: Vec<Alert>,
}

impl FileReport {
    #[must_use]
    pub fn has_debt_alert(&self) -> bool {
        self.classification.debt_alert
    }
}

/// Analyzes a snapshot with the default layout.
#[must_use]
pub fn analyze(snapshot: &FileSnapshot) -> FileReport {
    analyze_with(&LayoutConfig::default(), snapshot)
}

/// Analyzes a snapshot. The graph and the classification are computed
/// independently of each other.
#[must_use]
pub fn analyze_with(layout: &LayoutConfig, snapshot: &FileSnapshot) -> FileReport {
    let graph = graph::build_with(
        layout,
        &snapshot.current_file,
        &snapshot.dependencies,
        &snapshot.dependents,
    );
    let classification = metrics::classify(&snapshot.metrics);
    let alerts = metrics::alerts(&classification, &snapshot.metrics);

    FileReport {
        file_path: snapshot.current_file.file_path.clone(),
        graph,
        classification,
        rollup: metrics::summarize(snapshot),
        alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{AlertKind, QualityMetrics};
    use crate::types::{DependencyRecord, FileRef};

    #[test]
    fn test_analyze_combines_views() {
        let snapshot = FileSnapshot {
            current_file: FileRef::with_id("f1", "src/a.ts"),
            dependencies: vec![DependencyRecord::new("src/b.ts")],
            dependents: vec![FileRef::new("src/c.ts")],
            metrics: QualityMetrics {
                technical_debt: Some(7.5),
                ..QualityMetrics::default()
            },
            ..FileSnapshot::default()
        };
        let report = analyze(&snapshot);
        assert_eq!(report.file_path, "src/a.ts");
        assert_eq!(report.graph.nodes.len(), 3);
        assert_eq!(report.rollup.total_connections, 2);
        assert!(report.has_debt_alert());
        assert_eq!(report.alerts[0].kind, AlertKind::TechnicalDebt);
    }
}
