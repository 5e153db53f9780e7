// src/snapshot.rs
//! Reading file snapshots from disk or stdin.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FilescopeError, Result};
use crate::types::FileSnapshot;

/// Path argument meaning "read stdin".
pub const STDIN_MARKER: &str = "-";

/// Parses snapshot JSON. `origin` is only used in error messages.
///
/// # Errors
/// Returns `Json` if the text is not a valid snapshot.
pub fn parse(text: &str, origin: &Path) -> Result<FileSnapshot> {
    serde_json::from_str(text).map_err(|source| FilescopeError::Json {
        source,
        path: origin.to_path_buf(),
    })
}

/// Loads a snapshot from `path`, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns `Io` if the source cannot be read and `Json` if it does not parse.
pub fn load(path: &Path) -> Result<FileSnapshot> {
    let text = if path == Path::new(STDIN_MARKER) {
        read_stdin()?
    } else {
        fs::read_to_string(path).map_err(|source| FilescopeError::Io {
            source,
            path: path.to_path_buf(),
        })?
    };

    let snapshot = parse(&text, path)?;
    debug!(
        path = %path.display(),
        dependencies = snapshot.dependencies.len(),
        dependents = snapshot.dependents.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| FilescopeError::Io {
            source,
            path: PathBuf::from("<stdin>"),
        })?;
    Ok(buf)
}
