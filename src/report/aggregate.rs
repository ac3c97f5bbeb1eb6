use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::{ConformError, Result};
use crate::rules::Category;

/// Percentage of passed checks, rounded to one decimal place.
///
/// # Errors
/// Returns `DivisionUndefined` when `total` is zero.
#[allow(clippy::cast_precision_loss)] // Counts are far below 2^52
pub fn pass_rate(passed: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(ConformError::DivisionUndefined);
    }
    let percent = passed as f64 / total as f64 * 100.0;
    Ok((percent * 10.0).round() / 10.0)
}

/// Pass/fail counts for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// `None` when there are no results.
    pub rate: Option<f64>,
    /// Categories in first-seen order.
    pub categories: IndexMap<Category, CategoryStats>,
}

impl Aggregation {
    #[must_use]
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut counts: IndexMap<Category, (usize, usize)> = IndexMap::new();
        for result in results {
            let (total, passed) = counts.entry(result.category().clone()).or_default();
            *total += 1;
            if result.is_passed() {
                *passed += 1;
            }
        }

        let categories = counts
            .into_iter()
            .map(|(category, (total, passed))| {
                let stats = CategoryStats {
                    total,
                    passed,
                    failed: total - passed,
                    rate: pass_rate(passed, total).unwrap_or_default(),
                };
                (category, stats)
            })
            .collect();

        let total = results.len();
        let passed = results.iter().filter(|r| r.is_passed()).count();
        let rate = pass_rate(passed, total).ok();

        Self {
            total,
            passed,
            failed: total - passed,
            rate,
            categories,
        }
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
