//! Top-level controller: owns the project state and the step cursor.

use super::message::WizardMessage;
use super::step::{can_leave_define, can_leave_plan, is_valid_transition, NavigationResult, Step};
use super::{allocator, collector, selector};
use crate::catalog::Catalog;
use crate::core::{ProjectState, DEFAULT_PROJECT_NAME};
use crate::errors::{Error, Result};
use crate::observability;
use crate::scoring::{analyze, Analysis};

/// One measurement session.
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: Catalog,
    project_name: String,
    state: ProjectState,
    step: Step,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Catalog::standard(), DEFAULT_PROJECT_NAME)
    }
}

impl Wizard {
    pub fn new(catalog: Catalog, project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        observability::set_step(Step::Define);
        Self {
            catalog,
            state: ProjectState::new(project_name.clone()),
            project_name,
            step: Step::Define,
        }
    }

    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply a message from the current step's view.
    ///
    /// Messages owned by another step are refused. A refused or invalid
    /// message leaves the state untouched.
    pub fn dispatch(&mut self, message: WizardMessage) -> Result<()> {
        let owner = message.owning_step();
        if owner != self.step {
            return Err(Error::WrongStep {
                expected: owner,
                current: self.step,
            });
        }

        match message {
            WizardMessage::SelectScenario(id) => selector::select_scenario(&mut self.state, id),
            WizardMessage::ToggleCharacteristic(id) => {
                selector::toggle_characteristic(&mut self.state, id)
            }
            WizardMessage::SetWeight {
                characteristic,
                raw,
            } => {
                allocator::set_weight(&mut self.state, characteristic, &raw)?;
            }
            WizardMessage::SetMetricValue {
                characteristic,
                metric,
                raw,
            } => collector::set_metric_value(&mut self.state, characteristic, &metric, &raw)?,
        }
        Ok(())
    }

    /// Try to advance one step, running the current step's gate.
    pub fn next(&mut self) -> NavigationResult {
        let result = match self.step {
            Step::Define => match can_leave_define(self.state.selected_count()) {
                Ok(()) => {
                    allocator::auto_distribute(&mut self.state);
                    self.transition(Step::Plan)
                }
                Err(gate) => NavigationResult::Blocked(gate),
            },
            Step::Plan => match can_leave_plan(self.state.total_weight()) {
                Ok(()) => self.transition(Step::Collect),
                Err(gate) => NavigationResult::Blocked(gate),
            },
            Step::Collect => self.transition(Step::Analyze),
            Step::Analyze => NavigationResult::ConfirmReset,
        };

        if let NavigationResult::Blocked(gate) = &result {
            tracing::info!(step = %self.step, reason = %gate, "Navigation blocked");
        }
        result
    }

    /// Go back one step. Never runs a gate.
    pub fn previous(&mut self) -> NavigationResult {
        match self.step.previous() {
            Some(prev) => self.transition(prev),
            None => NavigationResult::Invalid { from: self.step },
        }
    }

    /// Discard everything and start a new measurement at Define.
    ///
    /// Only valid on the final step, after [`next`](Self::next) asked for
    /// confirmation.
    pub fn confirm_reset(&mut self) -> NavigationResult {
        if !is_valid_transition(self.step, Step::Define) {
            return NavigationResult::Invalid { from: self.step };
        }
        self.state = ProjectState::new(self.project_name.clone());
        tracing::info!("Measurement reset");
        self.transition(Step::Define)
    }

    /// Scores for the current state. Pure; available on every step.
    pub fn analysis(&self) -> Analysis {
        analyze(&self.state, &self.catalog.recommendations)
    }

    fn transition(&mut self, to: Step) -> NavigationResult {
        if !is_valid_transition(self.step, to) {
            return NavigationResult::Invalid { from: self.step };
        }
        tracing::debug!(from = %self.step, to = %to, "Step transition");
        self.step = to;
        self.on_enter(to);
        NavigationResult::Advanced(to)
    }

    fn on_enter(&mut self, step: Step) {
        observability::set_step(step);
        if step == Step::Collect {
            collector::auto_load(&mut self.state, &self.catalog.metrics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharacteristicId, ScenarioId};
    use crate::wizard::GateError;

    fn wizard_at_plan(scenario: ScenarioId) -> Wizard {
        let mut wizard = Wizard::default();
        wizard
            .dispatch(WizardMessage::SelectScenario(scenario))
            .unwrap();
        assert_eq!(wizard.next(), NavigationResult::Advanced(Step::Plan));
        wizard
    }

    #[test]
    fn test_define_gate_blocks_empty_selection() {
        let mut wizard = Wizard::default();
        assert_eq!(
            wizard.next(),
            NavigationResult::Blocked(GateError::NoCharacteristicSelected)
        );
        assert_eq!(wizard.step(), Step::Define);
    }

    #[test]
    fn test_previous_is_invalid_on_first_step() {
        let mut wizard = Wizard::default();
        assert_eq!(
            wizard.previous(),
            NavigationResult::Invalid { from: Step::Define }
        );
    }

    #[test]
    fn test_weight_gate_at_99_100_101() {
        let mut wizard = wizard_at_plan(ScenarioId::Mobile);
        let usab = CharacteristicId::Usability;

        wizard
            .dispatch(WizardMessage::set_weight(usab, "24"))
            .unwrap();
        assert_eq!(
            wizard.next(),
            NavigationResult::Blocked(GateError::WeightTotal { total: 99 })
        );

        wizard
            .dispatch(WizardMessage::set_weight(usab, "26"))
            .unwrap();
        assert_eq!(
            wizard.next(),
            NavigationResult::Blocked(GateError::WeightTotal { total: 101 })
        );

        wizard
            .dispatch(WizardMessage::set_weight(usab, "25"))
            .unwrap();
        assert_eq!(wizard.next(), NavigationResult::Advanced(Step::Collect));
    }

    #[test]
    fn test_entering_collect_loads_metrics() {
        let mut wizard = wizard_at_plan(ScenarioId::Iot);
        wizard.next();
        for characteristic in wizard.state().selected() {
            assert_eq!(characteristic.metrics.len(), 2);
        }
    }

    #[test]
    fn test_revisiting_plan_does_not_redistribute() {
        let mut wizard = wizard_at_plan(ScenarioId::Mobile);
        let usab = CharacteristicId::Usability;
        let port = CharacteristicId::Portability;
        wizard
            .dispatch(WizardMessage::set_weight(usab, "40"))
            .unwrap();
        wizard
            .dispatch(WizardMessage::set_weight(port, "10"))
            .unwrap();
        wizard.previous();
        assert_eq!(wizard.next(), NavigationResult::Advanced(Step::Plan));
        assert_eq!(wizard.state().characteristic(usab).weight, 40);
        assert_eq!(wizard.state().total_weight(), 100);
    }

    #[test]
    fn test_messages_are_refused_outside_their_step() {
        let mut wizard = Wizard::default();
        let sec = CharacteristicId::Security;
        let err = wizard
            .dispatch(WizardMessage::set_weight(sec, "10"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::WrongStep {
                expected: Step::Plan,
                current: Step::Define
            }
        ));
        assert_eq!(wizard.state().characteristic(sec).weight, 0);
    }

    #[test]
    fn test_final_step_requires_confirmation_then_resets() {
        let mut wizard = wizard_at_plan(ScenarioId::Health);
        wizard.next();
        wizard
            .dispatch(WizardMessage::set_metric_value(
                CharacteristicId::Security,
                "m_sec_1",
                "10",
            ))
            .unwrap();
        assert_eq!(wizard.next(), NavigationResult::Advanced(Step::Analyze));

        assert_eq!(wizard.next(), NavigationResult::ConfirmReset);
        assert_eq!(wizard.step(), Step::Analyze);

        assert_eq!(
            wizard.confirm_reset(),
            NavigationResult::Advanced(Step::Define)
        );
        assert_eq!(wizard.state(), &ProjectState::default());
    }

    #[test]
    fn test_confirm_reset_is_invalid_before_final_step() {
        let mut wizard = wizard_at_plan(ScenarioId::Health);
        assert_eq!(
            wizard.confirm_reset(),
            NavigationResult::Invalid { from: Step::Plan }
        );
        assert_eq!(wizard.state().selected_count(), 4);
    }
}
