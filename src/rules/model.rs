use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::root::normalize_target;

/// Grouping label attached to a rule and every result it produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a rule expects of its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// The target must be an existing regular file.
    FileExistence,
    /// The target file must have at least `threshold` lines.
    MinLineCount { threshold: usize },
    /// The target file must contain each substring. Each one is checked separately.
    ContentContains { substrings: Vec<String> },
    /// The target directory must have at least `threshold` immediate children.
    DirectoryEntryCount { threshold: usize },
}

/// Whether a rule inspects a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    File,
    Directory,
}

impl RuleKind {
    #[must_use]
    pub const fn scope(&self) -> RuleScope {
        match self {
            Self::FileExistence | Self::MinLineCount { .. } | Self::ContentContains { .. } => {
                RuleScope::File
            }
            Self::DirectoryEntryCount { .. } => RuleScope::Directory,
        }
    }

    /// Short label used in check names and logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FileExistence => "exists",
            Self::MinLineCount { .. } => "lines",
            Self::ContentContains { .. } => "contains",
            Self::DirectoryEntryCount { .. } => "entries",
        }
    }
}

/// A single declarative expectation about a path under the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    target: String,
    kind: RuleKind,
    category: Category,
    description: String,
}

impl Rule {
    /// Create a rule, normalizing `target`.
    ///
    /// # Errors
    /// Returns an error if `target` is empty, absolute, or climbs above the project root.
    pub fn new(
        target: &str,
        kind: RuleKind,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            target: normalize_target(target)?,
            kind,
            category,
            description: description.into(),
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn kind(&self) -> &RuleKind {
        &self.kind
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn scope(&self) -> RuleScope {
        self.kind.scope()
    }

    /// Names of the check results this rule produces, in order.
    #[must_use]
    pub fn check_names(&self) -> Vec<String> {
        match &self.kind {
            RuleKind::ContentContains { substrings } => substrings
                .iter()
                .map(|s| format!("{}: {} - {s}", self.kind.label(), self.target))
                .collect(),
            _ => vec![format!("{}: {}", self.kind.label(), self.target)],
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
