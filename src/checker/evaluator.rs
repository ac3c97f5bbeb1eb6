use chrono::{DateTime, Utc};

use crate::facts::{Fact, FileFacts};
use crate::rules::{Rule, RuleKind};

use super::result::CheckResult;

const FILE_NOT_FOUND: &str = "file not found";
const DIRECTORY_NOT_FOUND: &str = "directory not found";

/// Map a rule and its gathered fact onto check results.
///
/// Produces one result per rule, except `ContentContains`, which produces one
/// per substring. Every result carries the rule's category unchanged.
#[must_use]
pub fn evaluate(rule: &Rule, fact: &Fact, at: DateTime<Utc>) -> Vec<CheckResult> {
    let mut names = rule.check_names().into_iter();
    let mut next_name = || names.next().unwrap_or_else(|| rule.target().to_string());
    let category = rule.category();

    let outcome = |name: String, passed: bool, details: String| {
        let result = if passed {
            CheckResult::passed(name, details, category.clone(), at)
        } else {
            CheckResult::failed(name, details, category.clone(), at)
        };
        result.with_description(rule.description())
    };

    match (rule.kind(), fact) {
        (RuleKind::FileExistence, Fact::File(file)) => vec![outcome(
            next_name(),
            true,
            format!("file exists ({})", format_size(file.size)),
        )],
        (RuleKind::MinLineCount { threshold }, Fact::File(file)) => {
            vec![line_count_outcome(next_name(), file, *threshold, outcome)]
        }
        (RuleKind::ContentContains { substrings }, Fact::File(file)) => substrings
            .iter()
            .map(|needle| {
                let found = file.content.contains(needle.as_str());
                let details = if found {
                    "found".to_string()
                } else {
                    "missing required content".to_string()
                };
                outcome(next_name(), found, details)
            })
            .collect(),
        (RuleKind::DirectoryEntryCount { threshold }, Fact::Directory { entry_count }) => {
            vec![outcome(
                next_name(),
                *entry_count >= *threshold,
                format!("{entry_count} entries (required: {threshold})"),
            )]
        }
        (RuleKind::ContentContains { substrings }, _) => substrings
            .iter()
            .map(|_| outcome(next_name(), false, FILE_NOT_FOUND.to_string()))
            .collect(),
        (RuleKind::DirectoryEntryCount { .. }, _) => {
            vec![outcome(next_name(), false, DIRECTORY_NOT_FOUND.to_string())]
        }
        (RuleKind::FileExistence | RuleKind::MinLineCount { .. }, _) => {
            vec![outcome(next_name(), false, FILE_NOT_FOUND.to_string())]
        }
    }
}

fn line_count_outcome(
    name: String,
    file: &FileFacts,
    threshold: usize,
    outcome: impl Fn(String, bool, String) -> CheckResult,
) -> CheckResult {
    let lines = file.line_count;
    if lines >= threshold {
        outcome(name, true, format!("{lines} lines (required: {threshold})"))
    } else {
        outcome(
            name,
            false,
            format!("only {lines} lines (required: {threshold})"),
        )
    }
}

#[allow(clippy::cast_precision_loss)] // Display only
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
