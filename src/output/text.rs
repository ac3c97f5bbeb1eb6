use std::fmt::Write;

use crate::checker::CheckResult;
use crate::error::Result;
use crate::report::{QualityTier, Report};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable narration of a report: per-check outcomes grouped by
/// category, then totals, tier, category rates and recommendations.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn tier_color(tier: QualityTier) -> &'static str {
        match tier {
            QualityTier::Excellent => ansi::GREEN,
            QualityTier::Good => ansi::CYAN,
            QualityTier::Fair => ansi::YELLOW,
            QualityTier::Poor => ansi::RED,
        }
    }

    fn format_result(&self, result: &CheckResult, output: &mut String) {
        let icon = if result.is_passed() {
            self.paint("✓", ansi::GREEN)
        } else {
            self.paint("✗", ansi::RED)
        };
        writeln!(output, "  {icon} {}: {}", result.name(), result.details()).ok();
    }

    /// One section per category in first-seen order. Within a section,
    /// results keep their evaluation order.
    fn format_results(&self, report: &Report, output: &mut String) {
        for category in report.categories().keys() {
            writeln!(output, "{}", self.paint(category.as_str(), ansi::BOLD)).ok();
            for result in report.results().iter().filter(|r| r.category() == category) {
                self.format_result(result, output);
            }
            writeln!(output).ok();
        }
    }

    fn format_summary(&self, report: &Report, output: &mut String) {
        let summary = report.summary();
        let passed = self.paint(&summary.passed_checks.to_string(), ansi::GREEN);
        let failed = self.paint(&summary.failed_checks.to_string(), ansi::RED);
        writeln!(
            output,
            "Summary: {} checks, {passed} passed, {failed} failed",
            summary.total_checks
        )
        .ok();

        match (summary.pass_rate, summary.quality) {
            (Some(rate), Some(tier)) => {
                writeln!(output, "Pass rate: {rate:.1}%").ok();
                let label = format!("{tier} ({})", tier.band());
                writeln!(output, "Quality: {}", self.paint(&label, Self::tier_color(tier))).ok();
            }
            _ => {
                writeln!(output, "Pass rate: n/a (no checks configured)").ok();
            }
        }
    }

    fn format_categories(report: &Report, output: &mut String) {
        if report.categories().is_empty() {
            return;
        }
        writeln!(output).ok();
        writeln!(output, "Categories:").ok();
        for (category, stats) in report.categories() {
            writeln!(
                output,
                "  {category}: {}/{} ({:.1}%)",
                stats.passed, stats.total, stats.rate
            )
            .ok();
        }
    }

    fn format_recommendations(report: &Report, output: &mut String) {
        writeln!(output).ok();
        writeln!(output, "Recommendations:").ok();
        for recommendation in report.recommendations() {
            writeln!(output, "  - {recommendation}").ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        self.format_results(report, &mut output);
        self.format_summary(report, &mut output);
        Self::format_categories(report, &mut output);
        Self::format_recommendations(report, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
