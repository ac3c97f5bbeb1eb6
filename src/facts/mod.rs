//! Fact gathering: the only stage of the pipeline that touches the filesystem.
//!
//! Every I/O failure on a rule target is folded into [`Fact::Absent`], so the
//! evaluator never sees an `io::Error`.

use std::io;
use std::path::{Path, PathBuf};

use crate::filesystem::FileSystem;
use crate::rules::{ProjectRoot, Rule, RuleScope};

/// Observed state of a regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFacts {
    pub line_count: usize,
    pub content: String,
    pub size: u64,
}

/// Minimal filesystem state needed to evaluate one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    /// Missing, unreadable, outside the root, or of the wrong kind for the rule's scope.
    Absent,
    File(FileFacts),
    Directory { entry_count: usize },
}

impl Fact {
    #[cfg(test)]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Count lines the way editors do: a trailing partial line counts, a final
/// line separator does not open a new line.
#[must_use]
pub fn count_lines(content: &str) -> usize {
    content.lines().count()
}

pub struct FactGatherer<'a, F: FileSystem> {
    fs: &'a F,
    root: &'a ProjectRoot,
}

impl<'a, F: FileSystem> FactGatherer<'a, F> {
    #[must_use]
    pub const fn new(fs: &'a F, root: &'a ProjectRoot) -> Self {
        Self { fs, root }
    }

    #[must_use]
    pub fn gather(&self, rule: &Rule) -> Fact {
        let Some(path) = self.resolve_within_root(rule.target()) else {
            return Fact::Absent;
        };
        match rule.scope() {
            RuleScope::File => self.gather_file(&path),
            RuleScope::Directory => self.gather_directory(&path),
        }
    }

    /// Canonical path of a target, or `None` if it is missing or a symlink
    /// leads it outside the project root.
    fn resolve_within_root(&self, target: &str) -> Option<PathBuf> {
        let joined = self.root.join(target);
        let canonical = match self.fs.canonicalize(&joined) {
            Ok(canonical) => canonical,
            Err(e) => {
                log_absent(&joined, &e);
                return None;
            }
        };
        if canonical.starts_with(self.root.path()) {
            Some(canonical)
        } else {
            tracing::warn!(
                path = %joined.display(),
                resolved = %canonical.display(),
                "target resolves outside the project root, treating as absent"
            );
            None
        }
    }

    fn gather_file(&self, path: &Path) -> Fact {
        let stat = match self.fs.stat(path) {
            Ok(stat) if stat.is_file => stat,
            Ok(_) => {
                tracing::debug!(path = %path.display(), "not a regular file");
                return Fact::Absent;
            }
            Err(e) => {
                log_absent(path, &e);
                return Fact::Absent;
            }
        };

        match self.fs.read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes).into_owned();
                Fact::File(FileFacts {
                    line_count: count_lines(&content),
                    content,
                    size: stat.size,
                })
            }
            Err(e) => {
                log_absent(path, &e);
                Fact::Absent
            }
        }
    }

    fn gather_directory(&self, path: &Path) -> Fact {
        match self.fs.stat(path) {
            Ok(stat) if stat.is_dir => {}
            Ok(_) => {
                tracing::debug!(path = %path.display(), "not a directory");
                return Fact::Absent;
            }
            Err(e) => {
                log_absent(path, &e);
                return Fact::Absent;
            }
        }

        match self.fs.list_dir(path) {
            Ok(entries) => Fact::Directory {
                entry_count: entries.len(),
            },
            Err(e) => {
                log_absent(path, &e);
                Fact::Absent
            }
        }
    }
}

fn log_absent(path: &Path, err: &io::Error) {
    if err.kind() == io::ErrorKind::NotFound {
        tracing::debug!(path = %path.display(), "target not found");
    } else {
        tracing::warn!(
            path = %path.display(),
            error = %err,
            "target unreadable, treating as absent"
        );
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
