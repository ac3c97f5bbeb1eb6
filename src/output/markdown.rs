use std::fmt::Write;

use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

fn rate_cell(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_string(), |r| format!("{r:.1}%"))
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        let summary = report.summary();
        let quality = summary
            .quality
            .map_or_else(|| "-".to_string(), |q| format!("{q} ({})", q.band()));

        writeln!(output, "## Conformance Results\n").ok();
        writeln!(output, "| Metric | Value |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Total Checks | {} |", summary.total_checks).ok();
        writeln!(output, "| ✅ Passed | {} |", summary.passed_checks).ok();
        writeln!(output, "| ❌ Failed | {} |", summary.failed_checks).ok();
        writeln!(output, "| Pass Rate | {} |", rate_cell(summary.pass_rate)).ok();
        writeln!(output, "| Quality | {quality} |").ok();
        writeln!(output).ok();

        if !report.categories().is_empty() {
            writeln!(output, "### Categories\n").ok();
            writeln!(output, "| Category | Passed | Total | Rate |").ok();
            writeln!(output, "|----------|-------:|------:|-----:|").ok();
            for (category, stats) in report.categories() {
                writeln!(
                    output,
                    "| {category} | {} | {} | {} |",
                    stats.passed,
                    stats.total,
                    rate_cell(Some(stats.rate))
                )
                .ok();
            }
            writeln!(output).ok();
        }

        let failed: Vec<_> = report.results().iter().filter(|r| r.is_failed()).collect();
        if !failed.is_empty() {
            writeln!(output, "### Failed Checks\n").ok();
            writeln!(output, "| Check | Category | Details | Description |").ok();
            writeln!(output, "|-------|----------|---------|-------------|").ok();
            for result in failed {
                let description = match result.description() {
                    "" => "-",
                    text => text,
                };
                writeln!(
                    output,
                    "| `{}` | {} | {} | {description} |",
                    result.name(),
                    result.category(),
                    result.details()
                )
                .ok();
            }
            writeln!(output).ok();
        }

        writeln!(output, "### Recommendations\n").ok();
        for recommendation in report.recommendations() {
            writeln!(output, "- {recommendation}").ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
