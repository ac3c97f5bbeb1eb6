//! Configuration semantic validation.
//!
//! Checks that rule entries are well-formed after parsing: targets stay inside
//! the project root, keys match the entry kind, and check names are unique
//! within each category.

use std::collections::HashSet;

use crate::rules::normalize_target;
use crate::{ConformError, Result};

use super::expand::expand_rules;
use super::model::{CONFIG_VERSION, Config, RuleConfig, TargetKind};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the version is unsupported, a rule entry is malformed,
/// or two checks in the same category would share a name.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_version(config)?;
    for (i, entry) in config.rules.iter().enumerate() {
        validate_entry(i, entry)?;
    }
    validate_unique_names(config)?;
    Ok(())
}

pub(super) fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(ConformError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_entry(i: usize, entry: &RuleConfig) -> Result<()> {
    if entry.category.trim().is_empty() {
        return Err(ConformError::Config(format!(
            "rules[{i}].category must not be empty"
        )));
    }
    normalize_target(&entry.target)?;

    match entry.kind {
        TargetKind::File => {
            if entry.min_entries.is_some() {
                return Err(ConformError::Config(format!(
                    "rules[{i}].min_entries is only valid for directory rules (target: {})",
                    entry.target
                )));
            }
            if !entry.requires_existence() && entry.min_lines.is_none() && entry.contains.is_empty()
            {
                return Err(ConformError::Config(format!(
                    "rules[{i}] defines no checks (target: {})",
                    entry.target
                )));
            }
            if let Some(pos) = entry.contains.iter().position(String::is_empty) {
                return Err(ConformError::Config(format!(
                    "rules[{i}].contains[{pos}] must not be empty"
                )));
            }
        }
        TargetKind::Directory => {
            let file_keys = [
                ("exists", entry.exists.is_some()),
                ("min_lines", entry.min_lines.is_some()),
                ("contains", !entry.contains.is_empty()),
            ];
            if let Some((key, _)) = file_keys.iter().find(|(_, set)| *set) {
                return Err(ConformError::Config(format!(
                    "rules[{i}].{key} is only valid for file rules (target: {})",
                    entry.target
                )));
            }
        }
    }
    Ok(())
}

fn validate_unique_names(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();
    for rule in expand_rules(config)? {
        for name in rule.check_names() {
            let key = (rule.category().clone(), name);
            if !seen.insert(key.clone()) {
                return Err(ConformError::Config(format!(
                    "duplicate check '{}' in category '{}'",
                    key.1, key.0
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
