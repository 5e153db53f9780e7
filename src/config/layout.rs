// src/config/layout.rs
//! Configuration for the graph column layout.

use serde::{Deserialize, Serialize};

use crate::graph::layout::{
    LayoutConfig, DEFAULT_ANCHOR, DEFAULT_COLUMN_OFFSET, DEFAULT_ROW_SPACING,
};
use crate::graph::Position;

/// `[layout]` section of filescope.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Horizontal position of the focal node. Default: 400
    pub anchor_x: f64,
    /// Vertical position of the focal node. Default: 300
    pub anchor_y: f64,
    /// Distance from the focal node to each column. Default: 300
    pub column_offset: f64,
    /// Distance between rows in a column. Default: 100
    pub row_spacing: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            anchor_x: DEFAULT_ANCHOR.x,
            anchor_y: DEFAULT_ANCHOR.y,
            column_offset: DEFAULT_COLUMN_OFFSET,
            row_spacing: DEFAULT_ROW_SPACING,
        }
    }
}

impl LayoutSettings {
    /// Converts to the builder's layout format.
    #[must_use]
    pub fn to_layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            anchor: Position::new(self.anchor_x, self.anchor_y),
            column_offset: self.column_offset,
            row_spacing: self.row_spacing,
        }
        .sanitized()
    }
}
