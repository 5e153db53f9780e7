// src/metrics/alerts.rs
//! Alerts raised from a classification.

use serde::{Deserialize, Serialize};

use super::types::{Classification, CoverageLabel, QualityMetrics, SmellSeverity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    TechnicalDebt,
    HighCodeSmells,
    LowCoverage,
    QualityExcellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Positive,
}

impl Severity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Positive => "OK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
}

/// Collects alerts in a fixed order: debt, smells, coverage, quality.
#[must_use]
pub fn alerts(classification: &Classification, metrics: &QualityMetrics) -> Vec<Alert> {
    let mut out = Vec::new();

    if classification.debt_alert {
        out.push(Alert {
            kind: AlertKind::TechnicalDebt,
            severity: Severity::Critical,
            message: format!(
                "High technical debt: {} hours of estimated remediation",
                metrics.technical_debt()
            ),
        });
    }

    if classification.smell_severity == SmellSeverity::High {
        out.push(Alert {
            kind: AlertKind::HighCodeSmells,
            severity: Severity::Warning,
            message: format!("{} code smells detected", metrics.code_smells()),
        });
    }

    if classification.coverage_label == CoverageLabel::NeedsWork {
        out.push(Alert {
            kind: AlertKind::LowCoverage,
            severity: Severity::Info,
            message: format!("Test coverage at {}% needs work", metrics.test_coverage()),
        });
    }

    if classification.quality_alert {
        out.push(Alert {
            kind: AlertKind::QualityExcellent,
            severity: Severity::Positive,
            message: "Excellent quality: high maintainability with solid test coverage".to_string(),
        });
    }

    out
}
