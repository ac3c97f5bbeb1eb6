use std::fmt;

use serde::Serialize;

/// Discrete quality classification of an overall pass rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum QualityTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityTier {
    /// Lower bounds are inclusive: exactly 95.0 is `Excellent`.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 95.0 {
            Self::Excellent
        } else if rate >= 85.0 {
            Self::Good
        } else if rate >= 70.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Band description shown next to the tier in human-readable output.
    #[must_use]
    pub const fn band(self) -> &'static str {
        match self {
            Self::Excellent => "95%+",
            Self::Good => "85%+",
            Self::Fair => "70%+",
            Self::Poor => "<70%",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "quality_tests.rs"]
mod tests;
