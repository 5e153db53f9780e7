// src/metrics/types.rs
//! Metric inputs and the qualitative labels derived from them.

use serde::{Deserialize, Serialize};

/// Raw quality metrics for one file. Absent values read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_coverage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cyclomatic_complexity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_smells: Option<f64>,
    /// Estimated remediation effort, in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_debt: Option<f64>,
}

impl QualityMetrics {
    #[must_use]
    pub fn maintainability(&self) -> f64 {
        self.maintainability.unwrap_or(0.0)
    }

    #[must_use]
    pub fn test_coverage(&self) -> f64 {
        self.test_coverage.unwrap_or(0.0)
    }

    #[must_use]
    pub fn complexity(&self) -> f64 {
        self.cyclomatic_complexity.unwrap_or(0.0)
    }

    #[must_use]
    pub fn code_smells(&self) -> f64 {
        self.code_smells.unwrap_or(0.0)
    }

    #[must_use]
    pub fn technical_debt(&self) -> f64 {
        self.technical_debt.unwrap_or(0.0)
    }
}

/// Complexity bucket. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Maintainability bucket. Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaintainabilityTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl MaintainabilityTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageLabel {
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl CoverageLabel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmellSeverity {
    Normal,
    High,
}

/// Five normalized axes for the radar chart, each within `[0, 100]`.
///
/// Complexity, smells and debt are inverted so that larger is better on
/// every axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityVector {
    pub maintainability: f64,
    pub test_coverage: f64,
    pub complexity: f64,
    pub code_smells: f64,
    pub technical_debt: f64,
}

impl QualityVector {
    /// Axes in chart order with display labels.
    #[must_use]
    pub fn axes(&self) -> [(&'static str, f64); 5] {
        [
            ("Maintainability", self.maintainability),
            ("Test Coverage", self.test_coverage),
            ("Complexity", self.complexity),
            ("Code Smells", self.code_smells),
            ("Technical Debt", self.technical_debt),
        ]
    }
}

/// Everything derived from one [`QualityMetrics`] record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub complexity_tier: ComplexityTier,
    pub maintainability_tier: MaintainabilityTier,
    pub radar_vector: QualityVector,
    /// Technical debt above the alert line.
    pub debt_alert: bool,
    /// High maintainability together with solid coverage.
    pub quality_alert: bool,
    pub coverage_label: CoverageLabel,
    pub smell_severity: SmellSeverity,
    /// Complexity as a percentage of the ceiling, unclamped.
    pub complexity_percent: f64,
}
