// src/graph/mod.rs
//! Dependency graph model for a single focal file.
//!
//! Turns the focal file's dependency and dependent lists into a positioned
//! node/edge graph. Dependencies sit in a column left of the focal node and
//! dependents in a column to its right, so direction is readable from the
//! layout alone.

pub mod builder;
pub mod identity;
pub mod layout;
pub mod types;

pub use builder::{build, build_with};
pub use identity::IdAllocator;
pub use layout::LayoutConfig;
pub use types::{DependencyEdge, EdgeKind, GraphModel, GraphNode, NodeRole, Position};
