mod evaluator;
mod result;

pub use evaluator::evaluate;
pub use result::CheckResult;

use chrono::Utc;

use crate::facts::FactGatherer;
use crate::filesystem::FileSystem;
use crate::rules::{ProjectRoot, Rule};

/// Evaluate rules strictly in declaration order.
///
/// Each rule's fact is gathered and evaluated before the next rule starts.
/// The returned sequence is in evaluation order and is never modified afterwards.
#[must_use]
pub fn evaluate_rules<F: FileSystem>(
    rules: &[Rule],
    root: &ProjectRoot,
    fs: &F,
) -> Vec<CheckResult> {
    let gatherer = FactGatherer::new(fs, root);
    let mut results = Vec::with_capacity(rules.len());

    for rule in rules {
        let fact = gatherer.gather(rule);
        let produced = evaluate(rule, &fact, Utc::now());
        tracing::debug!(
            target_path = rule.target(),
            kind = rule.kind().label(),
            category = %rule.category(),
            checks = produced.len(),
            failed = produced.iter().filter(|r| r.is_failed()).count(),
            "evaluated rule"
        );
        results.extend(produced);
    }

    results
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
