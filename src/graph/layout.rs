// src/graph/layout.rs
//! Column layout: dependencies left, dependents right, focal file between.

use super::types::Position;

pub const DEFAULT_ANCHOR: Position = Position::new(400.0, 300.0);
pub const DEFAULT_COLUMN_OFFSET: f64 = 300.0;
pub const DEFAULT_ROW_SPACING: f64 = 100.0;

/// Geometry for the column layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Where the focal node sits.
    pub anchor: Position,
    /// Horizontal distance from the focal node to either column.
    pub column_offset: f64,
    /// Vertical distance between neighbours in one column.
    pub row_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR,
            column_offset: DEFAULT_COLUMN_OFFSET,
            row_spacing: DEFAULT_ROW_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Replaces values that would make columns overlap or collapse.
    ///
    /// Spacing and offset must be finite and positive; the anchor must be
    /// finite. Anything else falls back to the default. If the anchor is too
    /// large for a half row or the column offset to register in `f64`, the
    /// whole layout falls back to the default.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let anchor = if self.anchor.x.is_finite() && self.anchor.y.is_finite() {
            self.anchor
        } else {
            DEFAULT_ANCHOR
        };
        let layout = Self {
            anchor,
            column_offset: positive_or(self.column_offset, DEFAULT_COLUMN_OFFSET),
            row_spacing: positive_or(self.row_spacing, DEFAULT_ROW_SPACING),
        };
        if layout.resolves_steps() {
            layout
        } else {
            Self::default()
        }
    }

    /// True when `count` rows per column come out strictly increasing and
    /// both columns sit apart from the focal node.
    #[must_use]
    pub fn separates(&self, count: usize) -> bool {
        if !self.resolves_steps() {
            return false;
        }
        let mut previous = f64::NEG_INFINITY;
        for index in 0..count {
            let y = self.row_y(index, count);
            if !(y.is_finite() && y > previous) {
                return false;
            }
            previous = y;
        }
        true
    }

    fn resolves_steps(&self) -> bool {
        let Position { x, y } = self.anchor;
        y + self.row_spacing * 0.5 != y
            && y + self.row_spacing != y
            && x - self.column_offset != x
            && x + self.column_offset != x
    }

    #[must_use]
    pub fn focal_position(&self) -> Position {
        self.anchor
    }

    /// Position of the `index`-th of `count` dependency nodes.
    #[must_use]
    pub fn dependency_position(&self, index: usize, count: usize) -> Position {
        Position::new(
            self.anchor.x - self.column_offset,
            self.row_y(index, count),
        )
    }

    /// Position of the `index`-th of `count` dependent nodes.
    #[must_use]
    pub fn dependent_position(&self, index: usize, count: usize) -> Position {
        Position::new(
            self.anchor.x + self.column_offset,
            self.row_y(index, count),
        )
    }

    /// `anchor.y + (index - count / 2) * row_spacing`, real division.
    #[allow(clippy::cast_precision_loss)]
    fn row_y(&self, index: usize, count: usize) -> f64 {
        let offset = index as f64 - count as f64 / 2.0;
        self.anchor.y + offset * self.row_spacing
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_straddle_anchor() {
        let layout = LayoutConfig::default();
        let left = layout.dependency_position(0, 1);
        let right = layout.dependent_position(0, 1);
        assert!(left.x < layout.anchor.x);
        assert!(right.x > layout.anchor.x);
        assert!((layout.anchor.x - left.x - (right.x - layout.anchor.x)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rows_are_centered() {
        let layout = LayoutConfig::default();
        let ys: Vec<f64> = (0..4).map(|i| layout.dependency_position(i, 4).y).collect();
        assert_eq!(ys, vec![100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_single_row_uses_half_step() {
        let layout = LayoutConfig::default();
        assert!((layout.dependent_position(0, 1).y - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sanitized_rejects_degenerate_spacing() {
        let layout = LayoutConfig {
            anchor: Position::new(f64::NAN, 0.0),
            column_offset: -5.0,
            row_spacing: 0.0,
        }
        .sanitized();
        assert_eq!(layout, LayoutConfig::default());
    }

    #[test]
    fn test_sanitized_rejects_unresolvable_spacing() {
        let tiny = LayoutConfig {
            row_spacing: 1e-300,
            ..LayoutConfig::default()
        };
        assert_eq!(tiny.sanitized(), LayoutConfig::default());

        let far = LayoutConfig {
            anchor: Position::new(400.0, 1e20),
            ..LayoutConfig::default()
        };
        assert_eq!(far.sanitized(), LayoutConfig::default());

        let wide = LayoutConfig {
            anchor: Position::new(1e20, 300.0),
            ..LayoutConfig::default()
        };
        assert_eq!(wide.sanitized(), LayoutConfig::default());
    }

    #[test]
    fn test_separates_detects_merged_rows() {
        let layout = LayoutConfig::default();
        assert!(layout.separates(0));
        assert!(layout.separates(50));

        let merged = LayoutConfig {
            anchor: Position::new(400.0, 1e20),
            ..LayoutConfig::default()
        };
        assert!(!merged.separates(2));
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let custom = LayoutConfig {
            anchor: Position::new(0.0, 0.0),
            column_offset: 150.0,
            row_spacing: 40.0,
        };
        assert_eq!(custom.sanitized(), custom);
    }
}
