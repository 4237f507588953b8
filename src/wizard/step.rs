//! Wizard step state machine with explicit transitions and pure guards.
//!
//! # Step Graph
//!
//! ```text
//!     Define ──► Plan ──► Collect ──► Analyze
//!       ▲  ◄──────    ◄───────   ◄──────  │
//!       │                                 │
//!       └──────── (confirmed reset) ──────┘
//! ```
//!
//! Forward moves carry a guard; backward moves are always allowed except
//! from the first step.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four ISO 15939 activities the wizard walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Define,
    Plan,
    Collect,
    Analyze,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Define, Step::Plan, Step::Collect, Step::Analyze];

    /// 1-based position shown as "N / 4".
    pub fn number(&self) -> usize {
        match self {
            Step::Define => 1,
            Step::Plan => 2,
            Step::Collect => 3,
            Step::Analyze => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Step::Define => "Define",
            Step::Plan => "Plan",
            Step::Collect => "Collect",
            Step::Analyze => "Analyse",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Define => "Step 1: Define Quality Dimensions",
            Step::Plan => "Step 2: Plan - Assign Weights",
            Step::Collect => "Step 3: Collect Data",
            Step::Analyze => "Step 4: Analysis & Results",
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Define => Some(Step::Plan),
            Step::Plan => Some(Step::Collect),
            Step::Collect => Some(Step::Analyze),
            Step::Analyze => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Define => None,
            Step::Plan => Some(Step::Define),
            Step::Collect => Some(Step::Plan),
            Step::Analyze => Some(Step::Collect),
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Step::Analyze)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Valid step transitions.
///
/// Any transition not in this table is invalid.
pub const TRANSITIONS: &[(Step, Step)] = &[
    // Forward, each guarded
    (Step::Define, Step::Plan),
    (Step::Plan, Step::Collect),
    (Step::Collect, Step::Analyze),
    // Backward
    (Step::Plan, Step::Define),
    (Step::Collect, Step::Plan),
    (Step::Analyze, Step::Collect),
    // New measurement
    (Step::Analyze, Step::Define),
];

/// Check if a transition is valid based on the table.
pub fn is_valid_transition(from: Step, to: Step) -> bool {
    TRANSITIONS.contains(&(from, to))
}

/// Reasons a forward transition is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Please select at least one quality characteristic.")]
    NoCharacteristicSelected,

    #[error("Total weight must be 100%. Currently: {total}%")]
    WeightTotal { total: i64 },
}

// ============================================================================
// Pure Guard Functions
// ============================================================================

/// Guard: Can leave Define?
///
/// At least one characteristic must be selected.
pub fn can_leave_define(selected_count: usize) -> Result<(), GateError> {
    if selected_count == 0 {
        Err(GateError::NoCharacteristicSelected)
    } else {
        Ok(())
    }
}

/// Guard: Can leave Plan?
///
/// Selected weights must total exactly 100.
pub fn can_leave_plan(total_weight: i64) -> Result<(), GateError> {
    if total_weight == super::allocator::REQUIRED_TOTAL {
        Ok(())
    } else {
        Err(GateError::WeightTotal {
            total: total_weight,
        })
    }
}

/// Result of attempting a navigation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// Moved to the given step.
    Advanced(Step),

    /// A guard refused the move; the step is unchanged.
    Blocked(GateError),

    /// Next was pressed on the final step; a reset awaits confirmation.
    ConfirmReset,

    /// Not in the transition table (e.g. Previous on the first step).
    Invalid { from: Step },
}

impl NavigationResult {
    /// Returns true if navigation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationResult::Advanced(_))
    }
}
