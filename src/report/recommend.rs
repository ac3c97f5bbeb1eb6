use indexmap::IndexMap;

use crate::checker::CheckResult;
use crate::rules::Category;

pub const ALL_PASSED: &str =
    "All conformance checks passed; the project meets every configured rule.";
pub const READY_TO_PROCEED: &str = "The project is ready to proceed.";
pub const FIX_AND_RERUN: &str = "Fix the reported issues and re-run the conformance check.";

/// Derive remediation guidance from a result sequence.
///
/// One message per category with failures, in first-seen order, followed by
/// a generic closing message. With no failures, two fixed messages.
#[must_use]
pub fn synthesize(results: &[CheckResult]) -> Vec<String> {
    let mut failures: IndexMap<&Category, usize> = IndexMap::new();
    for result in results {
        let count = failures.entry(result.category()).or_insert(0);
        if result.is_failed() {
            *count += 1;
        }
    }

    if failures.values().all(|&n| n == 0) {
        return vec![ALL_PASSED.to_string(), READY_TO_PROCEED.to_string()];
    }

    let mut recommendations: Vec<String> = failures
        .into_iter()
        .filter(|&(_, n)| n > 0)
        .map(|(category, n)| category_message(category, n))
        .collect();
    recommendations.push(FIX_AND_RERUN.to_string());
    recommendations
}

fn category_message(category: &Category, failed: usize) -> String {
    let noun = if failed == 1 { "check" } else { "checks" };
    format!("{category}: {failed} failed {noun}, review the {category} targets for completeness")
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
