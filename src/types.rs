// src/types.rs
//! Input records supplied by the data-fetching layer.
//!
//! Every record mirrors the JSON shape the dashboard backend returns. Fields
//! that the backend may omit are `Option` or fall back to `Default`, so a
//! partially populated payload still deserializes.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::metrics::QualityMetrics;

/// A reference to a file, optionally carrying a backend id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub file_path: String,
}

impl FileRef {
    #[must_use]
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            id: None,
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn with_id(id: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            file_path: file_path.into(),
        }
    }
}

/// A file the focal file imports or requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    #[serde(flatten)]
    pub file: FileRef,
    /// Import mechanism label, e.g. `import` or `require`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<String>,
}

impl DependencyRecord {
    #[must_use]
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file: FileRef::new(file_path),
            dependency_type: None,
        }
    }

    #[must_use]
    pub fn typed(file_path: impl Into<String>, dependency_type: impl Into<String>) -> Self {
        Self {
            file: FileRef::new(file_path),
            dependency_type: Some(dependency_type.into()),
        }
    }
}

impl From<FileRef> for DependencyRecord {
    fn from(file: FileRef) -> Self {
        Self {
            file,
            dependency_type: None,
        }
    }
}

/// One commit touching the focal file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub commit_id: String,
    /// Lines added. Kept signed so odd backend values pass through.
    #[serde(default, deserialize_with = "lenient::churn")]
    pub additions: i64,
    #[serde(default, deserialize_with = "lenient::churn")]
    pub deletions: i64,
}

/// A semantically similar file, as scored by the embedding service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticNeighbor {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub file_path: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub similarity: f64,
}

/// Everything the dashboard knows about one file at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSnapshot {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub current_file: FileRef,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub dependencies: Vec<DependencyRecord>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub dependents: Vec<FileRef>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub metrics: QualityMetrics,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub change_history: Vec<ChangeRecord>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub semantic_neighbors: Vec<SemanticNeighbor>,
}
