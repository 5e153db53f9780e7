//! Output formatting for graph and quality reports.

pub mod json;
pub mod terminal;

pub use json::format_json;
pub use terminal::{
    format_alerts, format_classification, format_graph, format_report, format_rollup,
};
