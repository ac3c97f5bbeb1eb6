use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Emits the structured report exactly as it is persisted.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        report.to_json()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
