// src/graph/builder.rs
//! Graph construction from a focal file and its neighbour lists.

use super::identity::{edge_id, IdAllocator};
use super::layout::LayoutConfig;
use super::types::{DependencyEdge, EdgeKind, GraphModel, GraphNode, NodeRole};
use crate::types::{DependencyRecord, FileRef};

/// Builds the graph with the default layout.
#[must_use]
pub fn build(focal: &FileRef, dependencies: &[DependencyRecord], dependents: &[FileRef]) -> GraphModel {
    build_with(&LayoutConfig::default(), focal, dependencies, dependents)
}

/// Builds the graph with an explicit layout.
///
/// Node order is focal, then dependencies, then dependents, each in input
/// order. Edge order is dependency edges, then dependent edges. The output
/// depends only on the arguments.
#[must_use]
pub fn build_with(
    layout: &LayoutConfig,
    focal: &FileRef,
    dependencies: &[DependencyRecord],
    dependents: &[FileRef],
) -> GraphModel {
    let layout = separating_layout(layout, dependencies.len().max(dependents.len()));
    let mut ids = IdAllocator::new();
    let mut nodes = Vec::with_capacity(1 + dependencies.len() + dependents.len());
    let mut edges = Vec::with_capacity(dependencies.len() + dependents.len());

    let focal_id = ids.resolve(focal.id.as_deref(), NodeRole::Focal, 0);
    nodes.push(GraphNode {
        id: focal_id.clone(),
        role: NodeRole::Focal,
        file_path: focal.file_path.clone(),
        position: layout.focal_position(),
    });

    let count = dependencies.len();
    for (index, dep) in dependencies.iter().enumerate() {
        let id = ids.resolve(dep.file.id.as_deref(), NodeRole::Dependency, index);
        edges.push(DependencyEdge {
            id: edge_id(NodeRole::Dependency, index),
            source: id.clone(),
            target: focal_id.clone(),
            kind: EdgeKind::Imports,
            dependency_type: dep.dependency_type.clone(),
        });
        nodes.push(GraphNode {
            id,
            role: NodeRole::Dependency,
            file_path: dep.file.file_path.clone(),
            position: layout.dependency_position(index, count),
        });
    }

    let count = dependents.len();
    for (index, dependent) in dependents.iter().enumerate() {
        let id = ids.resolve(dependent.id.as_deref(), NodeRole::Dependent, index);
        edges.push(DependencyEdge {
            id: edge_id(NodeRole::Dependent, index),
            source: focal_id.clone(),
            target: id.clone(),
            kind: EdgeKind::ImportedBy,
            dependency_type: None,
        });
        nodes.push(GraphNode {
            id,
            role: NodeRole::Dependent,
            file_path: dependent.file_path.clone(),
            position: layout.dependent_position(index, count),
        });
    }

    GraphModel { nodes, edges }
}

/// Sanitized layout, or the default if its rows would still merge.
fn separating_layout(layout: &LayoutConfig, count: usize) -> LayoutConfig {
    let layout = layout.sanitized();
    if layout.separates(count) {
        layout
    } else {
        tracing::debug!(?layout, count, "layout cannot separate rows; using default");
        LayoutConfig::default()
    }
}
