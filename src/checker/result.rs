use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rules::Category;

/// Outcome of one rule evaluation, or one sub-check such as a single required substring.
///
/// Fields are private: a result is never modified after the evaluator creates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    name: String,
    passed: bool,
    details: String,
    category: Category,
    timestamp: DateTime<Utc>,
    /// Label of the producing rule. Shown by human-readable formatters only.
    #[serde(skip)]
    description: String,
}

impl CheckResult {
    #[must_use]
    pub fn passed(
        name: impl Into<String>,
        details: impl Into<String>,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            passed: true,
            details: details.into(),
            category,
            timestamp,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        details: impl Into<String>,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            details: details.into(),
            category,
            timestamp,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.passed
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compare everything except the capture time.
    #[cfg(test)]
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.name == other.name
            && self.passed == other.passed
            && self.details == other.details
            && self.category == other.category
            && self.description == other.description
    }
}
