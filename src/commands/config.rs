use std::path::Path;

use serde::Serialize;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{expand_rules, validate_config_semantics};
use crate::filesystem::RealFileSystem;
use crate::rules::{Rule, RuleKind};
use crate::{ConformError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let outcome = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|count| {
            if !cli.quiet {
                println!(
                    "Configuration is valid: {} ({count} rules)",
                    config.display()
                );
            }
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), format).map(|out| print!("{out}"))
        }
    };

    match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error ({}): {e}", e.stage());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file and returns the number of rules it expands to.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<usize> {
    if !config_path.exists() {
        return Err(ConformError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }
    let loaded = load_config(Some(config_path), RealFileSystem)?;
    validate_config_semantics(&loaded.config)?;
    Ok(expand_rules(&loaded.config)?.len())
}

/// Renders the expanded rule list of a configuration.
///
/// # Errors
/// Returns an error if the config cannot be loaded or the format is unknown.
pub fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> Result<String> {
    let loaded = load_config(config_path, RealFileSystem)?;
    validate_config_semantics(&loaded.config)?;
    let rules = expand_rules(&loaded.config)?;

    match format.to_lowercase().as_str() {
        "text" => Ok(format_rules_text(&rules)),
        "json" => format_rules_json(&rules),
        other => Err(ConformError::Config(format!(
            "Unknown format: {other}. Use 'text' or 'json'."
        ))),
    }
}

#[derive(Serialize)]
struct RuleView<'a> {
    target: &'a str,
    kind: &'static str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<usize>,
    #[serde(skip_serializing_if = "no_substrings")]
    contains: &'a [String],
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde skip signature
fn no_substrings(substrings: &&[String]) -> bool {
    substrings.is_empty()
}

impl<'a> From<&'a Rule> for RuleView<'a> {
    fn from(rule: &'a Rule) -> Self {
        let (threshold, contains): (Option<usize>, &[String]) = match rule.kind() {
            RuleKind::FileExistence => (None, &[]),
            RuleKind::MinLineCount { threshold } | RuleKind::DirectoryEntryCount { threshold } => {
                (Some(*threshold), &[])
            }
            RuleKind::ContentContains { substrings } => (None, substrings),
        };
        Self {
            target: rule.target(),
            kind: rule.kind().label(),
            category: rule.category().as_str(),
            threshold,
            contains,
            description: rule.description(),
        }
    }
}

pub(crate) fn format_rules_text(rules: &[Rule]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (index, rule) in rules.iter().enumerate() {
        let detail = match rule.kind() {
            RuleKind::FileExistence => String::new(),
            RuleKind::MinLineCount { threshold } | RuleKind::DirectoryEntryCount { threshold } => {
                format!(" >= {threshold}")
            }
            RuleKind::ContentContains { substrings } => format!(" {substrings:?}"),
        };
        let _ = writeln!(
            out,
            "{:>3}. [{}] {} {}{detail}",
            index + 1,
            rule.category(),
            rule.kind().label(),
            rule.target(),
        );
    }
    let _ = writeln!(out, "{} rules", rules.len());
    out
}

pub(crate) fn format_rules_json(rules: &[Rule]) -> Result<String> {
    let views: Vec<RuleView<'_>> = rules.iter().map(RuleView::from).collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
