use std::path::{Path, PathBuf};

use crate::error::{ConformError, Result};
use crate::filesystem::FileSystem;

/// Normalize a rule target to a `/`-separated path relative to the project root.
///
/// `.` and empty components are dropped and `..` is resolved lexically. The
/// root itself normalizes to `"."`.
///
/// # Errors
/// Returns an error if the target is empty, absolute, or resolves above the root.
pub fn normalize_target(target: &str) -> Result<String> {
    let unified = target.trim().replace('\\', "/");
    if unified.is_empty() {
        return Err(ConformError::Config("rule target must not be empty".to_string()));
    }
    if unified.starts_with('/') || has_drive_prefix(&unified) {
        return Err(ConformError::TargetEscapesRoot {
            target: target.to_string(),
        });
    }

    let mut components: Vec<&str> = Vec::new();
    for part in unified.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if components.pop().is_none() {
                    return Err(ConformError::TargetEscapesRoot {
                        target: target.to_string(),
                    });
                }
            }
            other => components.push(other),
        }
    }

    if components.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(components.join("/"))
    }
}

/// Drive prefixes (`C:`) are recognized on Windows only.
fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    cfg!(windows) && bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Canonical base directory every rule target is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// Resolve and canonicalize the project root.
    ///
    /// # Errors
    /// Returns `RootNotFound` if the path does not exist or is not a directory.
    pub fn resolve<F: FileSystem>(path: &Path, fs: &F) -> Result<Self> {
        let not_found = || ConformError::RootNotFound {
            path: path.to_path_buf(),
        };
        let canonical = fs.canonicalize(path).map_err(|_| not_found())?;
        match fs.stat(&canonical) {
            Ok(stat) if stat.is_dir => Ok(Self(canonical)),
            _ => Err(not_found()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Absolute path of a normalized rule target.
    #[must_use]
    pub fn join(&self, target: &str) -> PathBuf {
        if target == "." {
            return self.0.clone();
        }
        target
            .split('/')
            .fold(self.0.clone(), |acc, part| acc.join(part))
    }
}

#[cfg(test)]
#[path = "root_tests.rs"]
mod tests;
