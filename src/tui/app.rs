//! Application state for the wizard TUI.

use super::actions::{
    determine_dialog_action, determine_wizard_action, ActionContext, DialogAction, DialogKind,
    WizardAction,
};
use super::layout;
use crate::catalog::SCENARIOS;
use crate::core::{CharacteristicId, ScenarioId};
use crate::wizard::{NavigationResult, Wizard, WizardMessage};
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Weight fields accept at most three characters.
pub const WEIGHT_INPUT_MAX_LEN: usize = 3;

pub const RESET_PROMPT: &str = "Start a new measurement? Current data will be lost.";

/// Modal dialog shown over the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Alert { message: String },
    ConfirmReset,
}

impl Dialog {
    pub fn kind(&self) -> DialogKind {
        match self {
            Dialog::Alert { .. } => DialogKind::Alert,
            Dialog::ConfirmReset => DialogKind::Confirm,
        }
    }
}

/// Focusable rows of the Define step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineItem {
    Scenario(ScenarioId),
    Characteristic(CharacteristicId),
}

/// A metric input on the Collect step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricField {
    pub characteristic: CharacteristicId,
    pub metric: String,
}

pub struct WizardApp {
    wizard: Wizard,
    cursor: usize,
    scroll: u16,
    dialog: Option<Dialog>,
    status: Option<String>,
}

impl WizardApp {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            cursor: 0,
            scroll: 0,
            dialog: None,
            status: None,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Last rejected input, shown in the footer until the next key.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn define_items() -> Vec<DefineItem> {
        SCENARIOS
            .iter()
            .map(|s| DefineItem::Scenario(s.id))
            .chain(CharacteristicId::ALL.map(DefineItem::Characteristic))
            .collect()
    }

    pub fn weight_fields(&self) -> Vec<CharacteristicId> {
        self.wizard.state().selected().map(|c| c.id).collect()
    }

    pub fn metric_fields(&self) -> Vec<MetricField> {
        self.wizard
            .state()
            .selected()
            .flat_map(|c| {
                c.metrics.iter().map(move |m| MetricField {
                    characteristic: c.id,
                    metric: m.id().to_string(),
                })
            })
            .collect()
    }

    fn item_count(&self) -> usize {
        use crate::wizard::Step;
        match self.wizard.step() {
            Step::Define => Self::define_items().len(),
            Step::Plan => self.weight_fields().len(),
            Step::Collect => self.metric_fields().len(),
            Step::Analyze => 0,
        }
    }

    /// Handle a key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(dialog) = &self.dialog {
            if let Some(action) = determine_dialog_action(key, dialog.kind()) {
                self.execute_dialog_action(action);
            }
            return false;
        }

        let ctx = ActionContext::new(self.wizard.step(), self.item_count() > 0);
        match determine_wizard_action(key, ctx) {
            Some(action) => {
                self.status = None;
                self.execute_action(action)
            }
            None => false,
        }
    }

    pub fn execute_action(&mut self, action: WizardAction) -> bool {
        match action {
            WizardAction::Quit => return true,
            WizardAction::MoveUp => self.move_up(),
            WizardAction::MoveDown => self.move_down(),
            WizardAction::Activate => self.activate(),
            WizardAction::Next => {
                let result = self.wizard.next();
                self.apply_navigation(result);
            }
            WizardAction::Previous => {
                let result = self.wizard.previous();
                self.apply_navigation(result);
            }
            WizardAction::Type(c) => self.edit_field(|text| text.push(c)),
            WizardAction::Backspace => self.edit_field(|text| {
                text.pop();
            }),
        }
        false
    }

    fn execute_dialog_action(&mut self, action: DialogAction) {
        if action == DialogAction::Confirm && self.dialog == Some(Dialog::ConfirmReset) {
            let result = self.wizard.confirm_reset();
            self.apply_navigation(result);
        }
        self.dialog = None;
    }

    fn apply_navigation(&mut self, result: NavigationResult) {
        match result {
            NavigationResult::Advanced(_) => {
                self.cursor = 0;
                self.scroll = 0;
            }
            NavigationResult::Blocked(gate) => {
                self.dialog = Some(Dialog::Alert {
                    message: gate.to_string(),
                });
            }
            NavigationResult::ConfirmReset => self.dialog = Some(Dialog::ConfirmReset),
            NavigationResult::Invalid { .. } => {}
        }
    }

    fn move_up(&mut self) {
        if self.wizard.step().is_final() {
            self.scroll = self.scroll.saturating_sub(1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    fn move_down(&mut self) {
        if self.wizard.step().is_final() {
            self.scroll = self.scroll.saturating_add(1);
        } else {
            let last = self.item_count().saturating_sub(1);
            self.cursor = (self.cursor + 1).min(last);
        }
    }

    fn activate(&mut self) {
        let message = match Self::define_items().get(self.cursor) {
            Some(DefineItem::Scenario(id)) => WizardMessage::SelectScenario(*id),
            Some(DefineItem::Characteristic(id)) => WizardMessage::ToggleCharacteristic(*id),
            None => return,
        };
        self.submit(message);
    }

    /// Text the focused field currently shows.
    pub fn focused_text(&self) -> Option<String> {
        use crate::wizard::Step;
        let state = self.wizard.state();
        match self.wizard.step() {
            Step::Plan => self
                .weight_fields()
                .get(self.cursor)
                .map(|&id| state.characteristic(id).weight.to_string()),
            Step::Collect => self.metric_fields().get(self.cursor).and_then(|field| {
                state
                    .characteristic(field.characteristic)
                    .metric(&field.metric)
                    .map(|m| m.display_value())
            }),
            _ => None,
        }
    }

    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        use crate::wizard::Step;
        let Some(mut text) = self.focused_text() else {
            return;
        };
        edit(&mut text);

        let message = match self.wizard.step() {
            Step::Plan => {
                if text.chars().count() > WEIGHT_INPUT_MAX_LEN {
                    return;
                }
                match self.weight_fields().get(self.cursor) {
                    Some(&id) => WizardMessage::set_weight(id, text),
                    None => return,
                }
            }
            Step::Collect => match self.metric_fields().get(self.cursor) {
                Some(field) => WizardMessage::set_metric_value(
                    field.characteristic,
                    field.metric.clone(),
                    text,
                ),
                None => return,
            },
            _ => return,
        };
        self.submit(message);
    }

    fn submit(&mut self, message: WizardMessage) {
        if let Err(e) = self.wizard.dispatch(message) {
            tracing::debug!(error = %e, "Input rejected");
            self.status = Some(e.to_string());
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        layout::render(frame, self);
    }
}
