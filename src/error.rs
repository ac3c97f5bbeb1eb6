use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConformError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Project root not found or not a directory: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Rule target escapes the project root: {target}")]
    TargetEscapesRoot { target: String },

    /// Pass rate requested over an empty result set.
    #[error("Pass rate is undefined for zero results")]
    DivisionUndefined,

    #[error("Failed to write report to {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ConformError {
    /// Pipeline stage a fatal error belongs to, used in user-facing messages.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TargetEscapesRoot { .. } => {
                "configuration"
            }
            Self::RootNotFound { .. } => "project root",
            Self::DivisionUndefined => "aggregation",
            Self::ReportWrite { .. } | Self::JsonSerialize(_) => "report",
            Self::FileRead { .. } | Self::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConformError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
