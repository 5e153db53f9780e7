// src/metrics/rollup.rs
//! Aggregate counts shown next to the graph.

use serde::{Deserialize, Serialize};

use crate::types::{DependencyRecord, FileSnapshot, SemanticNeighbor};

/// Label used for dependency records without a type.
pub const UNSPECIFIED_TYPE: &str = "unspecified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rollup {
    pub dependency_count: usize,
    pub dependent_count: usize,
    pub total_connections: usize,
    pub commit_count: usize,
    pub total_additions: i64,
    pub total_deletions: i64,
    /// Additions minus deletions over the whole history.
    pub net_change: i64,
    pub neighbor_count: usize,
    pub average_similarity: f64,
    pub closest_neighbor: Option<SemanticNeighbor>,
    /// Per-label counts in first-seen order.
    pub dependency_types: Vec<TypeCount>,
}

/// Summarizes a snapshot's collections.
#[must_use]
pub fn summarize(snapshot: &FileSnapshot) -> Rollup {
    let dependency_count = snapshot.dependencies.len();
    let dependent_count = snapshot.dependents.len();

    let total_additions = saturating_total(snapshot.change_history.iter().map(|c| c.additions));
    let total_deletions = saturating_total(snapshot.change_history.iter().map(|c| c.deletions));

    Rollup {
        dependency_count,
        dependent_count,
        total_connections: dependency_count + dependent_count,
        commit_count: snapshot.change_history.len(),
        total_additions,
        total_deletions,
        net_change: total_additions.saturating_sub(total_deletions),
        neighbor_count: snapshot.semantic_neighbors.len(),
        average_similarity: average_similarity(&snapshot.semantic_neighbors),
        closest_neighbor: closest_neighbor(&snapshot.semantic_neighbors).cloned(),
        dependency_types: count_dependency_types(&snapshot.dependencies),
    }
}

fn saturating_total(counts: impl Iterator<Item = i64>) -> i64 {
    counts.fold(0, i64::saturating_add)
}

#[allow(clippy::cast_precision_loss)]
fn average_similarity(neighbors: &[SemanticNeighbor]) -> f64 {
    if neighbors.is_empty() {
        return 0.0;
    }
    let sum: f64 = neighbors.iter().map(|n| n.similarity).sum();
    sum / neighbors.len() as f64
}

/// Highest similarity wins; ties keep the earlier entry and NaN never wins.
#[must_use]
pub fn closest_neighbor(neighbors: &[SemanticNeighbor]) -> Option<&SemanticNeighbor> {
    let mut best: Option<&SemanticNeighbor> = None;
    for candidate in neighbors.iter().filter(|n| !n.similarity.is_nan()) {
        match best {
            Some(current) if candidate.similarity <= current.similarity => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[must_use]
pub fn count_dependency_types(dependencies: &[DependencyRecord]) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = Vec::new();
    for dep in dependencies {
        let label = dep.dependency_type.as_deref().unwrap_or(UNSPECIFIED_TYPE);
        match counts.iter_mut().find(|c| c.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(TypeCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChangeRecord, FileRef};

    fn neighbor(path: &str, similarity: f64) -> SemanticNeighbor {
        SemanticNeighbor {
            file_path: path.to_string(),
            similarity,
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let rollup = summarize(&FileSnapshot::default());
        assert_eq!(rollup, Rollup::default());
    }

    #[test]
    fn test_change_history_totals() {
        let snapshot = FileSnapshot {
            change_history: vec![
                ChangeRecord { commit_id: "a".into(), additions: 10, deletions: 4 },
                ChangeRecord { commit_id: "b".into(), additions: 1, deletions: 20 },
            ],
            ..FileSnapshot::default()
        };
        let rollup = summarize(&snapshot);
        assert_eq!(rollup.commit_count, 2);
        assert_eq!(rollup.total_additions, 11);
        assert_eq!(rollup.total_deletions, 24);
        assert_eq!(rollup.net_change, -13);
    }

    #[test]
    fn test_huge_churn_saturates() {
        let record = ChangeRecord { commit_id: "a".into(), additions: i64::MAX, deletions: i64::MIN };
        let snapshot = FileSnapshot {
            change_history: vec![record.clone(), record],
            ..FileSnapshot::default()
        };
        let rollup = summarize(&snapshot);
        assert_eq!(rollup.total_additions, i64::MAX);
        assert_eq!(rollup.total_deletions, i64::MIN);
        assert_eq!(rollup.net_change, i64::MAX);
    }

    #[test]
    fn test_negative_churn_is_summed_as_given() {
        let snapshot = FileSnapshot {
            change_history: vec![
                ChangeRecord { commit_id: "a".into(), additions: -3, deletions: 0 },
                ChangeRecord { commit_id: "b".into(), additions: 5, deletions: 1 },
            ],
            ..FileSnapshot::default()
        };
        let rollup = summarize(&snapshot);
        assert_eq!(rollup.total_additions, 2);
        assert_eq!(rollup.net_change, 1);
    }

    #[test]
    fn test_connection_counts() {
        let snapshot = FileSnapshot {
            dependencies: vec![DependencyRecord::new("a"), DependencyRecord::new("a")],
            dependents: vec![FileRef::new("b")],
            ..FileSnapshot::default()
        };
        let rollup = summarize(&snapshot);
        assert_eq!(rollup.dependency_count, 2);
        assert_eq!(rollup.dependent_count, 1);
        assert_eq!(rollup.total_connections, 3);
    }

    #[test]
    fn test_closest_neighbor_tie_keeps_first() {
        let neighbors = vec![
            neighbor("a", 0.5),
            neighbor("b", 0.9),
            neighbor("c", 0.9),
            neighbor("d", f64::NAN),
        ];
        let best = closest_neighbor(&neighbors).map(|n| n.file_path.as_str());
        assert_eq!(best, Some("b"));
    }

    #[test]
    fn test_closest_neighbor_all_nan() {
        let neighbors = vec![neighbor("a", f64::NAN)];
        assert!(closest_neighbor(&neighbors).is_none());
    }

    #[test]
    fn test_average_similarity() {
        let snapshot = FileSnapshot {
            semantic_neighbors: vec![neighbor("a", 0.2), neighbor("b", 0.6)],
            ..FileSnapshot::default()
        };
        let rollup = summarize(&snapshot);
        assert_eq!(rollup.neighbor_count, 2);
        assert!((rollup.average_similarity - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_dependency_types_first_seen_order() {
        let deps = vec![
            DependencyRecord::typed("a", "require"),
            DependencyRecord::new("b"),
            DependencyRecord::typed("c", "import"),
            DependencyRecord::typed("d", "require"),
        ];
        let counts = count_dependency_types(&deps);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("require", 2), (UNSPECIFIED_TYPE, 1), ("import", 1)]);
    }
}
