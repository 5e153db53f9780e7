use serde::{Deserialize, Serialize};

use super::layout::LayoutSettings;

/// `[report]` section of filescope.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_true")]
    pub color: bool,
    /// Exit non-zero from `classify` when the debt alert fires.
    #[serde(default)]
    pub fail_on_debt: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { color: true, fail_on_debt: false }
    }
}

const fn default_true() -> bool { true }

/// On-disk shape of filescope.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilescopeToml {
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub layout: LayoutSettings,
    pub report: ReportSettings,
}

impl From<FilescopeToml> for Config {
    fn from(toml: FilescopeToml) -> Self {
        Self {
            layout: toml.layout,
            report: toml.report,
        }
    }
}
