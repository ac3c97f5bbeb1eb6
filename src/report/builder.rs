use chrono::{DateTime, Utc};

use crate::checker::CheckResult;

use super::aggregate::Aggregation;
use super::quality::QualityTier;
use super::recommend::synthesize;
use super::{Report, Summary};

/// Composes a [`Report`] from an evaluated result sequence.
pub struct ReportBuilder {
    results: Vec<CheckResult>,
    generated_at: Option<DateTime<Utc>>,
}

impl ReportBuilder {
    #[must_use]
    pub const fn new(results: Vec<CheckResult>) -> Self {
        Self {
            results,
            generated_at: None,
        }
    }

    /// Stamp the report with a fixed time instead of the build time.
    #[must_use]
    pub const fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    #[must_use]
    pub fn build(self) -> Report {
        let aggregation = Aggregation::from_results(&self.results);
        let recommendations = synthesize(&self.results);

        let summary = Summary {
            total_checks: aggregation.total,
            passed_checks: aggregation.passed,
            failed_checks: aggregation.failed,
            pass_rate: aggregation.rate,
            quality: aggregation.rate.map(QualityTier::from_rate),
        };

        Report {
            summary,
            results: self.results,
            categories: aggregation.categories,
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            recommendations,
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
