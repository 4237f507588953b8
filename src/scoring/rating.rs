//! Rating bands and gap classification.

use serde::Serialize;
use std::fmt;

/// Quality band of an overall score (inclusive lower bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Rating::Excellent
        } else if score >= 80.0 {
            Rating::VeryGood
        } else if score >= 60.0 {
            Rating::Good
        } else if score >= 40.0 {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores below this are critical gaps.
pub const CRITICAL_BELOW: u32 = 60;
/// Scores below this are at least moderate gaps and get a recommendation.
pub const ADVISORY_BELOW: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapSeverity {
    Critical,
    Moderate,
}

impl GapSeverity {
    pub fn classify(score: u32) -> Option<Self> {
        if score < CRITICAL_BELOW {
            Some(GapSeverity::Critical)
        } else if score < ADVISORY_BELOW {
            Some(GapSeverity::Moderate)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GapSeverity::Critical => "Critical",
            GapSeverity::Moderate => "Moderate",
        }
    }
}

/// Distance of a characteristic score from the target of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub amount: u32,
    pub severity: Option<GapSeverity>,
}

impl Gap {
    pub fn for_score(score: u32) -> Self {
        Self {
            amount: 100u32.saturating_sub(score),
            severity: GapSeverity::classify(score),
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.amount == 0
    }

    /// "Perfect" at 100, otherwise "Gap: -N".
    pub fn label(&self) -> String {
        if self.is_perfect() {
            "Perfect".to_string()
        } else {
            format!("Gap: -{}", self.amount)
        }
    }
}
