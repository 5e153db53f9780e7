//! Dependency graph layout and quality-metric classification for a single
//! file of a project-analytics dashboard.
//!
//! The two halves are independent pure functions:
//! [`graph::build`] turns a focal file and its neighbour lists into a
//! positioned node/edge graph, and [`metrics::classify`] turns raw quality
//! metrics into tiers, radar axes and alerts. [`dashboard::analyze`] runs
//! both over one [`types::FileSnapshot`].

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod exit;
pub mod graph;
mod lenient;
pub mod metrics;
pub mod reporting;
pub mod snapshot;
pub mod types;

pub use dashboard::{analyze, FileReport};
pub use graph::{build, GraphModel};
pub use metrics::{classify, Classification, QualityMetrics};
pub use types::{DependencyRecord, FileRef, FileSnapshot};
