//! Shared test fixtures.
//!
//! `MockFileSystem` models a small in-memory project tree so fact gathering,
//! evaluation and config loading can be tested without touching disk.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::filesystem::{FileSystem, PathStat};
use crate::rules::{Category, Rule, RuleKind};

pub struct MockFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert(PathBuf::from("/project"));
        Self {
            files: HashMap::new(),
            dirs,
            unreadable: HashSet::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = normalize_path(&path.into());
        self.add_ancestors(&path);
        self.files.insert(path, content.as_bytes().to_vec());
        self
    }

    pub fn with_bytes(mut self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        let path = normalize_path(&path.into());
        self.add_ancestors(&path);
        self.files.insert(path, content.to_vec());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    /// A file that exists but fails on read.
    pub fn with_unreadable_file(self, path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        let mut fs = self.with_file(path.clone(), "");
        fs.unreadable.insert(path);
        fs
    }

    pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        let mut current = path.parent();
        while let Some(parent) = current {
            if parent.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(parent.to_path_buf());
            current = parent.parent();
        }
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        self.files.contains_key(&normalized) || self.dirs.contains(&normalized)
    }

    fn stat(&self, path: &Path) -> std::io::Result<PathStat> {
        let normalized = normalize_path(path);
        if let Some(content) = self.files.get(&normalized) {
            return Ok(PathStat {
                is_file: true,
                is_dir: false,
                size: content.len() as u64,
            });
        }
        if self.dirs.contains(&normalized) {
            return Ok(PathStat {
                is_file: false,
                is_dir: true,
                size: 0,
            });
        }
        Err(Error::new(ErrorKind::NotFound, "path not found"))
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let normalized = normalize_path(path);
        if self.unreadable.contains(&normalized) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        self.files
            .get(&normalized)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<String>> {
        let normalized = normalize_path(path);
        if !self.dirs.contains(&normalized) {
            return Err(Error::new(ErrorKind::NotFound, "directory not found"));
        }
        let children: BTreeSet<String> = self
            .files
            .keys()
            .chain(self.dirs.iter())
            .filter(|p| p.parent() == Some(normalized.as_path()))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        Ok(children.into_iter().collect())
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        let normalized = normalize_path(path);
        if self.exists(&normalized) {
            Ok(normalized)
        } else {
            Err(Error::new(ErrorKind::NotFound, "path not found"))
        }
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    let normalized = if path_str.starts_with('/') {
        format!("/{}", components.join("/"))
    } else {
        components.join("/")
    };
    PathBuf::from(normalized)
}

pub fn rule(target: &str, kind: RuleKind, category: &str) -> Rule {
    Rule::new(target, kind, Category::new(category), "").unwrap()
}
