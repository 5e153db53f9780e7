// src/metrics/classifier.rs
//! Metric classification into tiers, radar axes and alert flags.

use super::thresholds::{
    COMPLEXITY_CEILING, COMPLEXITY_TIERS, COVERAGE_GOOD, DEBT_ALERT_HOURS, DEBT_PENALTY,
    MAINTAINABILITY_TIERS, QUALITY_MIN_COVERAGE, QUALITY_MIN_MAINTAINABILITY, SMELL_ALERT_COUNT,
    SMELL_PENALTY,
};
use super::types::{
    Classification, ComplexityTier, CoverageLabel, MaintainabilityTier, QualityMetrics,
    QualityVector, SmellSeverity,
};

/// Classifies a metrics record. Missing fields count as zero.
#[must_use]
pub fn classify(metrics: &QualityMetrics) -> Classification {
    Classification {
        complexity_tier: complexity_tier(metrics.complexity()),
        maintainability_tier: maintainability_tier(metrics.maintainability()),
        radar_vector: radar_vector(metrics),
        debt_alert: is_debt_alert(metrics),
        quality_alert: is_quality_alert(metrics),
        coverage_label: coverage_label(metrics.test_coverage()),
        smell_severity: smell_severity(metrics.code_smells()),
        complexity_percent: complexity_ratio(metrics.complexity()) * 100.0,
    }
}

#[must_use]
pub fn complexity_tier(complexity: f64) -> ComplexityTier {
    COMPLEXITY_TIERS.lookup(complexity_ratio(complexity))
}

#[must_use]
pub fn maintainability_tier(maintainability: f64) -> MaintainabilityTier {
    MAINTAINABILITY_TIERS.lookup(maintainability)
}

#[must_use]
pub fn coverage_label(coverage: f64) -> CoverageLabel {
    if coverage > COVERAGE_GOOD {
        CoverageLabel::Good
    } else {
        CoverageLabel::NeedsWork
    }
}

#[must_use]
pub fn smell_severity(smells: f64) -> SmellSeverity {
    if smells > SMELL_ALERT_COUNT {
        SmellSeverity::High
    } else {
        SmellSeverity::Normal
    }
}

/// Normalizes the five radar axes into `[0, 100]`.
#[must_use]
pub fn radar_vector(metrics: &QualityMetrics) -> QualityVector {
    QualityVector {
        maintainability: clamp_axis(metrics.maintainability()),
        test_coverage: clamp_axis(metrics.test_coverage()),
        complexity: clamp_axis(100.0 - complexity_ratio(metrics.complexity()) * 100.0),
        code_smells: clamp_axis(100.0 - metrics.code_smells() * SMELL_PENALTY),
        technical_debt: clamp_axis(100.0 - metrics.technical_debt() * DEBT_PENALTY),
    }
}

fn is_debt_alert(metrics: &QualityMetrics) -> bool {
    metrics.technical_debt() > DEBT_ALERT_HOURS
}

fn is_quality_alert(metrics: &QualityMetrics) -> bool {
    metrics.maintainability() >= QUALITY_MIN_MAINTAINABILITY
        && metrics.test_coverage() >= QUALITY_MIN_COVERAGE
}

fn complexity_ratio(complexity: f64) -> f64 {
    complexity / COMPLEXITY_CEILING
}

/// `f64::clamp` passes NaN through; the chart needs a number.
fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> QualityMetrics {
        QualityMetrics::default()
    }

    #[test]
    fn test_empty_metrics_default_to_zero() {
        let c = classify(&metrics());
        assert_eq!(c.complexity_tier, ComplexityTier::Low);
        assert_eq!(c.maintainability_tier, MaintainabilityTier::Poor);
        assert!(!c.debt_alert);
        assert!(!c.quality_alert);
        assert_eq!(c.coverage_label, CoverageLabel::NeedsWork);
        assert_eq!(c.smell_severity, SmellSeverity::Normal);
        // Zero smells and zero debt read as perfect on the inverted axes.
        assert!((c.radar_vector.code_smells - 100.0).abs() < f64::EPSILON);
        assert!((c.radar_vector.technical_debt - 100.0).abs() < f64::EPSILON);
        assert!((c.radar_vector.complexity - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_excellent_file() {
        let c = classify(&QualityMetrics {
            maintainability: Some(85.0),
            test_coverage: Some(75.0),
            technical_debt: Some(1.0),
            ..metrics()
        });
        assert_eq!(c.maintainability_tier, MaintainabilityTier::Excellent);
        assert!(c.quality_alert);
        assert!(!c.debt_alert);
        assert_eq!(c.coverage_label, CoverageLabel::Good);
    }

    #[test]
    fn test_indebted_complex_file() {
        let c = classify(&QualityMetrics {
            technical_debt: Some(6.0),
            cyclomatic_complexity: Some(50.0),
            ..metrics()
        });
        assert!(c.debt_alert);
        assert_eq!(c.complexity_tier, ComplexityTier::High);
    }

    #[test]
    fn test_alert_boundaries() {
        let at_line = classify(&QualityMetrics {
            technical_debt: Some(5.0),
            ..metrics()
        });
        assert!(!at_line.debt_alert);

        let quality_edge = classify(&QualityMetrics {
            maintainability: Some(80.0),
            test_coverage: Some(70.0),
            ..metrics()
        });
        assert!(quality_edge.quality_alert);
        // Label uses a strict bound while the alert uses an inclusive one.
        assert_eq!(quality_edge.coverage_label, CoverageLabel::NeedsWork);
    }

    #[test]
    fn test_both_alerts_can_fire() {
        let c = classify(&QualityMetrics {
            maintainability: Some(90.0),
            test_coverage: Some(90.0),
            technical_debt: Some(9.0),
            ..metrics()
        });
        assert!(c.debt_alert);
        assert!(c.quality_alert);
    }

    #[test]
    fn test_radar_axes_are_clamped() {
        let c = classify(&QualityMetrics {
            maintainability: Some(140.0),
            test_coverage: Some(-3.0),
            cyclomatic_complexity: Some(600.0),
            code_smells: Some(12.0),
            technical_debt: Some(-4.0),
        });
        let v = c.radar_vector;
        assert!((v.maintainability - 100.0).abs() < f64::EPSILON);
        assert!(v.test_coverage.abs() < f64::EPSILON);
        assert!(v.complexity.abs() < f64::EPSILON);
        assert!(v.code_smells.abs() < f64::EPSILON);
        assert!((v.technical_debt - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_radar_linear_region() {
        let v = radar_vector(&QualityMetrics {
            cyclomatic_complexity: Some(30.0),
            code_smells: Some(2.0),
            technical_debt: Some(4.0),
            ..metrics()
        });
        assert!((v.complexity - 50.0).abs() < 1e-9);
        assert!((v.code_smells - 60.0).abs() < 1e-9);
        assert!((v.technical_debt - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_axis_reads_zero() {
        let v = radar_vector(&QualityMetrics {
            maintainability: Some(f64::NAN),
            ..metrics()
        });
        assert!(v.maintainability.abs() < f64::EPSILON);
    }

    #[test]
    fn test_smell_severity() {
        assert_eq!(smell_severity(3.0), SmellSeverity::Normal);
        assert_eq!(smell_severity(4.0), SmellSeverity::High);
    }

    #[test]
    fn test_complexity_percent() {
        let c = classify(&QualityMetrics {
            cyclomatic_complexity: Some(30.0),
            ..metrics()
        });
        assert!((c.complexity_percent - 50.0).abs() < 1e-9);
    }
}
