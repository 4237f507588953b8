//! Predefined case studies.

use crate::core::{CharacteristicId, ScenarioId};
use serde::Serialize;

/// A case study that preselects a fixed set of characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: &'static str,
    pub description: &'static str,
    pub targets: &'static [CharacteristicId],
}

impl Scenario {
    pub fn targets_characteristic(&self, id: CharacteristicId) -> bool {
        self.targets.contains(&id)
    }
}

use CharacteristicId::*;

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: ScenarioId::Iot,
        title: "IoT System",
        description:
            "Internet of Things device with resource constraints and connectivity requirements.",
        targets: &[PerformanceEfficiency, Reliability, Security, Compatibility],
    },
    Scenario {
        id: ScenarioId::Health,
        title: "Safety Critical (Health)",
        description: "Healthcare system where reliability and accuracy are life-critical.",
        targets: &[Reliability, Security, FunctionalSuitability, Usability],
    },
    Scenario {
        id: ScenarioId::Mobile,
        title: "Mobile Application",
        description:
            "Consumer mobile app focused on user experience and cross-platform compatibility.",
        targets: &[Usability, PerformanceEfficiency, Compatibility, Portability],
    },
];

/// Look up a scenario by id. Total over [`ScenarioId`].
pub fn scenario(id: ScenarioId) -> &'static Scenario {
    SCENARIOS
        .iter()
        .find(|s| s.id == id)
        .unwrap_or(&SCENARIOS[0])
}
