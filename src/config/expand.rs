use crate::error::{ConformError, Result};
use crate::rules::{Category, Rule, RuleKind};

use super::model::{Config, RuleConfig, TargetKind};

/// Expand rule entries into rules, preserving declaration order.
///
/// A file entry yields, in order: an existence rule (unless `exists = false`),
/// a line-count rule, and a content rule. A directory entry yields one
/// entry-count rule.
///
/// # Errors
/// Returns an error if a target is invalid or escapes the project root.
pub fn expand_rules(config: &Config) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for (index, entry) in config.rules.iter().enumerate() {
        expand_entry(entry, &mut rules).map_err(|e| match e {
            ConformError::Config(msg) => ConformError::Config(format!("rules[{index}]: {msg}")),
            other => other,
        })?;
    }
    Ok(rules)
}

fn expand_entry(entry: &RuleConfig, rules: &mut Vec<Rule>) -> Result<()> {
    let category = Category::new(entry.category.trim());
    let make = |kind| Rule::new(&entry.target, kind, category.clone(), entry.description.as_str());

    match entry.kind {
        TargetKind::File => {
            if entry.requires_existence() {
                rules.push(make(RuleKind::FileExistence)?);
            }
            if let Some(threshold) = entry.min_lines {
                rules.push(make(RuleKind::MinLineCount { threshold })?);
            }
            if !entry.contains.is_empty() {
                rules.push(make(RuleKind::ContentContains {
                    substrings: entry.contains.clone(),
                })?);
            }
        }
        TargetKind::Directory => {
            rules.push(make(RuleKind::DirectoryEntryCount {
                threshold: entry.min_entries.unwrap_or(0),
            })?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
