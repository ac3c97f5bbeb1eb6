use std::path::PathBuf;

use crate::checker::evaluate_rules;
use crate::cli::{CheckArgs, Cli};
use crate::config::{expand_rules, validate_config_semantics};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::report::{JsonFileWriter, Report, ReportBuilder, ReportWriter};
use crate::rules::ProjectRoot;
use crate::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{color_choice_to_mode, load_config, write_output};

/// Report of a check run and where it should be persisted.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: Report,
    pub report_path: Option<PathBuf>,
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error ({}): {e}", e.stage());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run a check against the real filesystem and emit its output.
///
/// # Errors
/// Returns an error if configuration, root resolution, report persistence,
/// or output writing fails.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let outcome = execute_check(args, RealFileSystem)?;

    let writer = outcome.report_path.as_ref().map(JsonFileWriter::new);
    if let Some(writer) = &writer {
        writer.write(&outcome.report)?;
    }

    let formatted = format_report(&outcome.report, args.format, cli)?;
    write_output(args.output.as_deref(), &formatted, cli.quiet)?;

    if let Some(writer) = &writer
        && !cli.quiet
    {
        eprintln!("Report saved: {}", writer.path().display());
    }

    Ok(exit_code(&outcome.report, args.warn_only))
}

/// Load rules, resolve the project root, evaluate, and build the report.
///
/// Nothing is written; persistence is left to the caller.
///
/// # Errors
/// Returns an error if the configuration is invalid or the project root is missing.
pub fn execute_check<F: FileSystem>(args: &CheckArgs, fs: F) -> Result<CheckOutcome> {
    let loaded = load_config(args.config.as_deref(), &fs)?;
    validate_config_semantics(&loaded.config)?;
    let rules = expand_rules(&loaded.config)?;

    let root_path = args.root.clone().unwrap_or_else(|| loaded.project_root());
    let root = ProjectRoot::resolve(&root_path, &fs)?;
    tracing::info!(root = %root.path().display(), rules = rules.len(), "checking project");

    let results = evaluate_rules(&rules, &root, &fs);
    let report = ReportBuilder::new(results).build();

    let report_path = if args.no_report {
        None
    } else {
        args.report.clone().or_else(|| loaded.report_path())
    };

    Ok(CheckOutcome {
        report,
        report_path,
    })
}

fn format_report(report: &Report, format: OutputFormat, cli: &Cli) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color)).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter.format(report),
    }
}

#[must_use]
pub const fn exit_code(report: &Report, warn_only: bool) -> i32 {
    if report.has_failures() && !warn_only {
        EXIT_CHECKS_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
