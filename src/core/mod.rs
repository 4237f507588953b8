//! Project state shared by the four wizard steps.
//!
//! [`ProjectState`] is owned by the wizard controller and threaded through
//! each step explicitly. Steps read it through `&ProjectState` and change it
//! only through the operations in [`crate::wizard`].

pub mod types;

use serde::{Deserialize, Serialize};

pub use types::{
    format_number, Characteristic, CharacteristicId, Metric, MetricDefinition, ScenarioId,
    ScenarioSelection,
};

pub const DEFAULT_PROJECT_NAME: &str = "My ISO 15939 Project";

/// Root of all mutable session data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    /// Informational only.
    pub project_name: String,
    pub selected_scenario: Option<ScenarioSelection>,
    /// Exactly one record per [`CharacteristicId`], in display order.
    characteristics: Vec<Characteristic>,
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME)
    }
}

impl ProjectState {
    /// Fresh state: nothing selected, all weights 0, no metrics loaded.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            selected_scenario: None,
            characteristics: CharacteristicId::ALL
                .iter()
                .map(|&id| Characteristic::new(id))
                .collect(),
        }
    }

    pub fn characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }

    pub(crate) fn characteristics_mut(&mut self) -> &mut [Characteristic] {
        &mut self.characteristics
    }

    pub fn characteristic(&self, id: CharacteristicId) -> &Characteristic {
        &self.characteristics[id.index()]
    }

    pub(crate) fn characteristic_mut(&mut self, id: CharacteristicId) -> &mut Characteristic {
        &mut self.characteristics[id.index()]
    }

    /// Selected characteristics in display order.
    pub fn selected(&self) -> impl Iterator<Item = &Characteristic> {
        self.characteristics.iter().filter(|c| c.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Sum of weights over selected characteristics.
    ///
    /// Weights are stored unclamped, so the sum is taken exactly and then
    /// saturated to the `i64` bounds.
    pub fn total_weight(&self) -> i64 {
        let exact: i128 = self.selected().map(|c| i128::from(c.weight)).sum();
        i64::try_from(exact).unwrap_or(if exact < 0 { i64::MIN } else { i64::MAX })
    }

    /// True when a preset case study (not a manual selection) is active.
    pub fn in_case_study_mode(&self) -> bool {
        matches!(self.selected_scenario, Some(ScenarioSelection::Preset(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_all_eight_characteristics_unselected() {
        let state = ProjectState::default();
        assert_eq!(state.project_name, DEFAULT_PROJECT_NAME);
        assert_eq!(state.characteristics().len(), 8);
        for (c, id) in state.characteristics().iter().zip(CharacteristicId::ALL) {
            assert_eq!(c.id, id);
            assert!(!c.selected);
            assert_eq!(c.weight, 0);
            assert!(c.metrics.is_empty());
        }
        assert_eq!(state.selected_scenario, None);
    }

    #[test]
    fn test_total_weight_ignores_unselected() {
        let mut state = ProjectState::default();
        state.characteristic_mut(CharacteristicId::Security).weight = 40;
        let usab = state.characteristic_mut(CharacteristicId::Usability);
        usab.weight = 60;
        usab.selected = true;
        assert_eq!(state.total_weight(), 60);
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn test_total_weight_saturates_instead_of_overflowing() {
        let mut state = ProjectState::default();
        for id in [
            CharacteristicId::PerformanceEfficiency,
            CharacteristicId::Compatibility,
        ] {
            let c = state.characteristic_mut(id);
            c.selected = true;
            c.weight = i64::MAX;
        }
        assert_eq!(state.total_weight(), i64::MAX);

        let comp = CharacteristicId::Compatibility;
        state.characteristic_mut(comp).weight = i64::MIN;
        assert_eq!(state.total_weight(), -1);

        // An exact sum never lands on 100 by saturating first
        let usab = state.characteristic_mut(CharacteristicId::Usability);
        usab.selected = true;
        usab.weight = 100 - i64::MAX;
        state.characteristic_mut(comp).weight = i64::MAX;
        assert_eq!(state.total_weight(), i64::MAX);
    }

    #[test]
    fn test_case_study_mode_excludes_custom() {
        let mut state = ProjectState::default();
        assert!(!state.in_case_study_mode());
        state.selected_scenario = Some(ScenarioSelection::Custom);
        assert!(!state.in_case_study_mode());
        state.selected_scenario = Some(ScenarioSelection::Preset(ScenarioId::Iot));
        assert!(state.in_case_study_mode());
    }
}
