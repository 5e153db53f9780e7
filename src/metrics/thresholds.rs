// src/metrics/thresholds.rs
//! Fixed cut points for every metric classification.
//!
//! These values are shared with the dashboard renderer and must not drift.
//! Tables are scanned top to bottom; the first matching row wins and the
//! fallback applies when no row matches.

use super::types::{ComplexityTier, MaintainabilityTier};

/// Complexity value treated as 100% of the scale.
pub const COMPLEXITY_CEILING: f64 = 60.0;
/// Each code smell removes this many points from the smell axis.
pub const SMELL_PENALTY: f64 = 20.0;
/// Each hour of debt removes this many points from the debt axis.
pub const DEBT_PENALTY: f64 = 12.5;

/// Debt hours above which the debt alert fires.
pub const DEBT_ALERT_HOURS: f64 = 5.0;
/// Smell count above which severity is high.
pub const SMELL_ALERT_COUNT: f64 = 3.0;
/// Coverage above which the coverage label reads "Good".
pub const COVERAGE_GOOD: f64 = 70.0;
/// Minimum maintainability for the positive quality alert.
pub const QUALITY_MIN_MAINTAINABILITY: f64 = 80.0;
/// Minimum coverage for the positive quality alert.
pub const QUALITY_MIN_COVERAGE: f64 = 70.0;

/// How a row compares its cut point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value > cut`
    Above,
    /// `value >= cut`
    AtLeast,
}

impl Bound {
    #[must_use]
    pub fn admits(self, value: f64, cut: f64) -> bool {
        match self {
            Self::Above => value > cut,
            Self::AtLeast => value >= cut,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Threshold<T> {
    pub cut: f64,
    pub bound: Bound,
    pub tier: T,
}

/// An ordered threshold table with a fallback tier.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<T: 'static> {
    pub rows: &'static [Threshold<T>],
    pub fallback: T,
}

impl<T: Copy + 'static> TierTable<T> {
    /// Looks up the tier for `value`. NaN matches no row.
    #[must_use]
    pub fn lookup(&self, value: f64) -> T {
        self.rows
            .iter()
            .find(|row| row.bound.admits(value, row.cut))
            .map_or(self.fallback, |row| row.tier)
    }
}

/// Keyed on `complexity / COMPLEXITY_CEILING`.
pub const COMPLEXITY_TIERS: TierTable<ComplexityTier> = TierTable {
    rows: &[
        Threshold { cut: 0.70, bound: Bound::Above, tier: ComplexityTier::High },
        Threshold { cut: 0.40, bound: Bound::Above, tier: ComplexityTier::Medium },
    ],
    fallback: ComplexityTier::Low,
};

/// Keyed on the raw 0-100 maintainability index.
pub const MAINTAINABILITY_TIERS: TierTable<MaintainabilityTier> = TierTable {
    rows: &[
        Threshold { cut: 80.0, bound: Bound::AtLeast, tier: MaintainabilityTier::Excellent },
        Threshold { cut: 60.0, bound: Bound::AtLeast, tier: MaintainabilityTier::Good },
        Threshold { cut: 40.0, bound: Bound::AtLeast, tier: MaintainabilityTier::Fair },
    ],
    fallback: MaintainabilityTier::Poor,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_boundaries() {
        assert_eq!(COMPLEXITY_TIERS.lookup(0.0), ComplexityTier::Low);
        assert_eq!(COMPLEXITY_TIERS.lookup(0.40), ComplexityTier::Low);
        assert_eq!(COMPLEXITY_TIERS.lookup(0.41), ComplexityTier::Medium);
        assert_eq!(COMPLEXITY_TIERS.lookup(0.70), ComplexityTier::Medium);
        assert_eq!(COMPLEXITY_TIERS.lookup(0.71), ComplexityTier::High);
    }

    #[test]
    fn test_maintainability_boundaries() {
        assert_eq!(MAINTAINABILITY_TIERS.lookup(39.9), MaintainabilityTier::Poor);
        assert_eq!(MAINTAINABILITY_TIERS.lookup(40.0), MaintainabilityTier::Fair);
        assert_eq!(MAINTAINABILITY_TIERS.lookup(59.9), MaintainabilityTier::Fair);
        assert_eq!(MAINTAINABILITY_TIERS.lookup(60.0), MaintainabilityTier::Good);
        assert_eq!(MAINTAINABILITY_TIERS.lookup(79.9), MaintainabilityTier::Good);
        assert_eq!(MAINTAINABILITY_TIERS.lookup(80.0), MaintainabilityTier::Excellent);
    }

    #[test]
    fn test_nan_takes_fallback() {
        assert_eq!(COMPLEXITY_TIERS.lookup(f64::NAN), ComplexityTier::Low);
        assert_eq!(MAINTAINABILITY_TIERS.lookup(f64::NAN), MaintainabilityTier::Poor);
    }

    #[test]
    fn test_rows_are_descending() {
        for pair in COMPLEXITY_TIERS.rows.windows(2) {
            assert!(pair[0].cut > pair[1].cut);
            assert!(pair[0].tier > pair[1].tier);
        }
        for pair in MAINTAINABILITY_TIERS.rows.windows(2) {
            assert!(pair[0].cut > pair[1].cut);
            assert!(pair[0].tier > pair[1].tier);
        }
    }
}
