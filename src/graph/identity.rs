// src/graph/identity.rs
//! Node identity resolution.
//!
//! All id decisions for one build go through [`IdAllocator`], so the
//! uniqueness rule lives in exactly one place.

use std::collections::HashSet;

use super::types::NodeRole;

/// Where a node's id comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdentity<'a> {
    /// The backend supplied an id.
    Explicit(&'a str),
    /// No id; derive one from the record's role and list position.
    Positional { role: NodeRole, index: usize },
}

impl<'a> NodeIdentity<'a> {
    /// Classifies a record. Empty ids count as absent.
    #[must_use]
    pub fn of(explicit: Option<&'a str>, role: NodeRole, index: usize) -> Self {
        match explicit {
            Some(id) if !id.is_empty() => Self::Explicit(id),
            _ => Self::Positional { role, index },
        }
    }
}

/// Synthetic id for a record without one: `dependency-0`, `dependent-3`, `focal`.
#[must_use]
pub fn positional_id(role: NodeRole, index: usize) -> String {
    match role {
        NodeRole::Focal => role.id_prefix().to_string(),
        _ => format!("{}-{index}", role.id_prefix()),
    }
}

/// Id of the edge connecting the focal node to the record at `index`.
#[must_use]
pub fn edge_id(role: NodeRole, index: usize) -> String {
    format!("edge-{}-{index}", role.id_prefix())
}

/// Hands out node ids that are unique within one graph build.
#[derive(Debug, Default)]
pub struct IdAllocator {
    taken: HashSet<String>,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the id for a record.
    ///
    /// An explicit id wins unless an earlier node already claimed it, in
    /// which case the positional id is used. A positional id that collides
    /// with an explicit one gets a `-1`, `-2`, ... suffix.
    pub fn resolve(&mut self, explicit: Option<&str>, role: NodeRole, index: usize) -> String {
        if let NodeIdentity::Explicit(id) = NodeIdentity::of(explicit, role, index) {
            if self.taken.insert(id.to_string()) {
                return id.to_string();
            }
        }
        self.claim_positional(role, index)
    }

    fn claim_positional(&mut self, role: NodeRole, index: usize) -> String {
        let base = positional_id(role, index);
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while !self.taken.insert(candidate.clone()) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        candidate
    }
}
