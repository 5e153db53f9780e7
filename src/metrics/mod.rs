// src/metrics/mod.rs
//! Quality metric classification.
//!
//! Maps raw metrics onto fixed tiers, a five-axis radar vector and alert
//! flags, and rolls up the auxiliary collections into counts. Every function
//! here is total: missing metrics read as zero and nothing fails.

pub mod alerts;
pub mod classifier;
pub mod rollup;
pub mod thresholds;
pub mod types;

pub use alerts::{alerts, Alert, AlertKind, Severity};
pub use classifier::{classify, complexity_tier, maintainability_tier, radar_vector};
pub use rollup::{summarize, Rollup, TypeCount};
pub use types::{
    Classification, ComplexityTier, CoverageLabel, MaintainabilityTier, QualityMetrics,
    QualityVector, SmellSeverity,
};
