//! Update messages: the only way a step view changes project state.

use super::step::Step;
use crate::core::{CharacteristicId, ScenarioId};

/// A state change requested by one of the step views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMessage {
    SelectScenario(ScenarioId),
    ToggleCharacteristic(CharacteristicId),
    SetWeight {
        characteristic: CharacteristicId,
        raw: String,
    },
    SetMetricValue {
        characteristic: CharacteristicId,
        metric: String,
        raw: String,
    },
}

impl WizardMessage {
    pub fn set_weight(characteristic: CharacteristicId, raw: impl Into<String>) -> Self {
        Self::SetWeight {
            characteristic,
            raw: raw.into(),
        }
    }

    pub fn set_metric_value(
        characteristic: CharacteristicId,
        metric: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self::SetMetricValue {
            characteristic,
            metric: metric.into(),
            raw: raw.into(),
        }
    }

    /// The step whose view is allowed to send this message.
    pub fn owning_step(&self) -> Step {
        match self {
            Self::SelectScenario(_) | Self::ToggleCharacteristic(_) => Step::Define,
            Self::SetWeight { .. } => Step::Plan,
            Self::SetMetricValue { .. } => Step::Collect,
        }
    }
}
