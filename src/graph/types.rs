// src/graph/types.rs
//! Core types for the positioned dependency graph.

use serde::{Deserialize, Serialize};

/// A point on the layout canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Role of a node relative to the focal file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Focal,
    /// A file the focal file imports. Laid out on the left.
    Dependency,
    /// A file that imports the focal file. Laid out on the right.
    Dependent,
}

impl NodeRole {
    /// Prefix used when synthesizing ids for records that carry none.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Focal => "focal",
            Self::Dependency => "dependency",
            Self::Dependent => "dependent",
        }
    }
}

/// Semantic direction of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// `dependency -> focal`
    #[serde(rename = "imports")]
    Imports,
    /// `focal -> dependent`
    #[serde(rename = "imported-by")]
    ImportedBy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub role: NodeRole,
    pub file_path: String,
    pub position: Position,
}

/// A directed relation between two nodes of one graph.
///
/// Edges are never deduplicated: two identical input records produce two
/// edges with distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<String>,
}

/// The derived graph view for one focal file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<DependencyEdge>,
}

impl GraphModel {
    #[must_use]
    pub fn focal(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.role == NodeRole::Focal)
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Nodes of one role, in layout order.
    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }
}
