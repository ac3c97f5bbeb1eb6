use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConformError, Result};

use super::Report;

/// Persists a finished report.
pub trait ReportWriter {
    /// # Errors
    /// Returns an error if the report cannot be serialized or written.
    fn write(&self, report: &Report) -> Result<()>;
}

/// Writes the report as pretty-printed JSON, creating parent directories.
pub struct JsonFileWriter {
    path: PathBuf,
}

impl JsonFileWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for JsonFileWriter {
    fn write(&self, report: &Report) -> Result<()> {
        let json = report.to_json()?;
        let io_err = |source| ConformError::ReportWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, json).map_err(io_err)?;

        tracing::info!(path = %self.path.display(), "report written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
