// src/config/mod.rs
pub mod layout;
pub mod types;

pub use self::layout::LayoutSettings;
pub use self::types::{Config, FilescopeToml, ReportSettings};

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{FilescopeError, Result};
use crate::graph::LayoutConfig;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "filescope.toml";

impl Config {
    /// Loads `filescope.toml` from the working directory.
    ///
    /// A missing file yields defaults. A malformed file is logged and
    /// ignored, since nobody asked for it explicitly.
    #[must_use]
    pub fn load() -> Self {
        Self::load_implicit(Path::new(CONFIG_FILE))
    }

    /// Like [`Config::load`] for an arbitrary path.
    #[must_use]
    pub fn load_implicit(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; falling back to default config");
                Self::default()
            }
        }
    }

    /// Loads a config file the user named explicitly.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FilescopeError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content).map_err(|source| FilescopeError::Config {
            source,
            path: path.to_path_buf(),
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses filescope.toml content.
    ///
    /// # Errors
    /// Returns the TOML error if parsing fails.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<FilescopeToml>(content).map(Self::from)
    }

    #[must_use]
    pub fn layout_config(&self) -> LayoutConfig {
        self.layout.to_layout_config()
    }
}
