use std::path::{Path, PathBuf};

use crate::error::{ConformError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::Config;
use super::validation::validate_version;

pub const LOCAL_CONFIG_NAME: &str = ".conform-guard.toml";

/// A loaded configuration together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// Path of the config file that was read.
    pub source: PathBuf,
}

impl LoadResult {
    fn base_dir(&self) -> &Path {
        match self.source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Project root from `project.root`, relative to the config file's directory.
    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        let base = self.base_dir();
        self.config
            .project
            .root
            .as_deref()
            .map_or_else(|| base.to_path_buf(), |root| base.join(root))
    }

    /// Report path from `project.report`, relative to the config file's directory.
    #[must_use]
    pub fn report_path(&self) -> Option<PathBuf> {
        self.config
            .project
            .report
            .as_deref()
            .map(|report| self.base_dir().join(report))
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if no config file is found, or it cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Without an explicit path, looks for `.conform-guard.toml` in the current directory.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_version(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let cwd = self.fs.current_dir()?;
        let local = cwd.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }
        Err(ConformError::Config(format!(
            "No {LOCAL_CONFIG_NAME} found in {}. Run `conform-guard init` to create one.",
            cwd.display()
        )))
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ConformError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;
        tracing::debug!(path = %path.display(), entries = config.rules.len(), "loaded config");
        Ok(LoadResult {
            config,
            source: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
