//! Step 1: choose which characteristics to measure.

use crate::catalog::scenario;
use crate::core::{CharacteristicId, ProjectState, ScenarioId, ScenarioSelection};

/// Select exactly the targets of a predefined case study.
///
/// Weights and loaded metrics are left untouched.
pub fn select_scenario(state: &mut ProjectState, scenario_id: ScenarioId) {
    let preset = scenario(scenario_id);
    for characteristic in state.characteristics_mut() {
        characteristic.selected = preset.targets_characteristic(characteristic.id);
    }
    state.selected_scenario = Some(ScenarioSelection::Preset(scenario_id));
    tracing::debug!(scenario = %scenario_id, targets = preset.targets.len(), "Scenario selected");
}

/// Flip the selection of one characteristic and switch to a custom selection.
pub fn toggle_characteristic(state: &mut ProjectState, id: CharacteristicId) {
    let characteristic = state.characteristic_mut(id);
    characteristic.selected = !characteristic.selected;
    let selected = characteristic.selected;
    state.selected_scenario = Some(ScenarioSelection::Custom);
    tracing::debug!(characteristic = %id, selected, "Characteristic toggled");
}
