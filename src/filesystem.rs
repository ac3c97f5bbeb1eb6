//! Filesystem abstraction for testability.
//!
//! Rule evaluation and configuration loading read the project tree only through
//! [`FileSystem`], so both can run against an in-memory tree in tests.

use std::io;
use std::path::{Path, PathBuf};

/// Kind and size of a path, as reported by [`FileSystem::stat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathStat {
    pub is_file: bool,
    pub is_dir: bool,
    pub size: u64,
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the kind and size of a path, following symlinks.
    ///
    /// # Errors
    /// Returns an error if the path does not exist or cannot be inspected.
    fn stat(&self, path: &Path) -> io::Result<PathStat>;

    /// Read file contents as raw bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read file contents as a UTF-8 string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        String::from_utf8(self.read(path)?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// List the names of the immediate children of a directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Canonicalize a path to its absolute, normalized form.
    ///
    /// # Errors
    /// Returns an error if the path cannot be canonicalized (e.g., it doesn't exist).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn stat(&self, path: &Path) -> io::Result<PathStat> {
        (**self).stat(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_dir(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn stat(&self, path: &Path) -> io::Result<PathStat> {
        let metadata = std::fs::metadata(path)?;
        Ok(PathStat {
            is_file: metadata.is_file(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
        })
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        dunce::canonicalize(path)
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
