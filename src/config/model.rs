use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Top-level `.conform-guard.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. Absent means current.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub project: ProjectConfig,

    /// Rule entries [[rules]], evaluated in declaration order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Project settings [project].
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project root to check (default: the config file's directory).
    #[serde(default)]
    pub root: Option<String>,

    /// Path of the JSON report written after each check run.
    #[serde(default)]
    pub report: Option<String>,
}

/// Whether a rule entry targets a file or a directory.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    File,
    Directory,
}

/// One rule entry [[rules]]. Expands into one or more rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    /// Path relative to the project root.
    pub target: String,

    /// Grouping label for reporting (e.g. "frontend", "database").
    pub category: String,

    #[serde(default)]
    pub kind: TargetKind,

    #[serde(default)]
    pub description: String,

    /// Require the file to exist (file entries only, default: true).
    #[serde(default)]
    pub exists: Option<bool>,

    /// Minimum line count (file entries only).
    #[serde(default)]
    pub min_lines: Option<usize>,

    /// Required substrings, each checked separately (file entries only).
    #[serde(default)]
    pub contains: Vec<String>,

    /// Minimum number of immediate children (directory entries only, default: 0).
    #[serde(default)]
    pub min_entries: Option<usize>,
}

impl RuleConfig {
    #[must_use]
    pub fn requires_existence(&self) -> bool {
        self.exists.unwrap_or(true)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
