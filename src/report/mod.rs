//! Report assembly: aggregation, quality tier, recommendations and persistence.

mod aggregate;
mod builder;
mod quality;
mod recommend;
mod writer;

pub use aggregate::{Aggregation, CategoryStats, pass_rate};
pub use builder::ReportBuilder;
pub use quality::QualityTier;
pub use recommend::{ALL_PASSED, FIX_AND_RERUN, READY_TO_PROCEED, synthesize};
pub use writer::{JsonFileWriter, ReportWriter};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;
use crate::rules::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    /// `None` when no checks ran.
    pub pass_rate: Option<f64>,
    pub quality: Option<QualityTier>,
}

/// Immutable outcome of one conformance run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    summary: Summary,
    results: Vec<CheckResult>,
    categories: IndexMap<Category, CategoryStats>,
    #[serde(rename = "timestamp")]
    generated_at: DateTime<Utc>,
    recommendations: Vec<String>,
}

impl Report {
    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    #[must_use]
    pub const fn categories(&self) -> &IndexMap<Category, CategoryStats> {
        &self.categories
    }

    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.summary.failed_checks > 0
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
