//! Pure action determination for wizard keyboard handling.
//!
//! - Pure core: `determine_*_action` maps key + context to an action
//! - Imperative shell: [`WizardApp`](super::app::WizardApp) executes it
//!
//! Ctrl+C is handled by the event loop before any of this runs.

use crate::wizard::Step;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User intents while no dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Quit the application.
    Quit,

    /// Move the cursor (or scroll) up by one.
    MoveUp,

    /// Move the cursor (or scroll) down by one.
    MoveDown,

    /// Select the scenario or toggle the characteristic under the cursor.
    Activate,

    /// Run the current step's gate and advance.
    Next,

    /// Go back one step.
    Previous,

    /// Append a character to the focused field.
    Type(char),

    /// Remove the last character of the focused field.
    Backspace,
}

/// User intents while a modal dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Informational; any key closes it.
    Alert,
    /// Yes/no question.
    Confirm,
}

/// Minimal state needed to evaluate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub step: Step,
    /// Whether the step has anything for the cursor to focus.
    pub has_items: bool,
}

impl ActionContext {
    pub fn new(step: Step, has_items: bool) -> Self {
        Self { step, has_items }
    }
}

/// Determine which action a key triggers outside of dialogs.
///
/// Step-specific bindings win over the shared navigation keys.
pub fn determine_wizard_action(key: KeyEvent, ctx: ActionContext) -> Option<WizardAction> {
    let step_action = match ctx.step {
        Step::Define => determine_define_action(key, ctx),
        Step::Plan | Step::Collect => determine_field_action(key, ctx),
        Step::Analyze => determine_analyze_action(key),
    };
    step_action.or_else(|| determine_navigation_action(key))
}

/// Keys shared by every step.
pub fn determine_navigation_action(key: KeyEvent) -> Option<WizardAction> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(WizardAction::Quit),
        KeyCode::Right | KeyCode::Tab => Some(WizardAction::Next),
        KeyCode::Left | KeyCode::BackTab => Some(WizardAction::Previous),
        _ => None,
    }
}

pub fn determine_define_action(key: KeyEvent, ctx: ActionContext) -> Option<WizardAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(WizardAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(WizardAction::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') if ctx.has_items => Some(WizardAction::Activate),
        _ => None,
    }
}

/// Plan and Collect: the focused row is a text field.
pub fn determine_field_action(key: KeyEvent, ctx: ActionContext) -> Option<WizardAction> {
    if !ctx.has_items {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(WizardAction::MoveUp),
        KeyCode::Down | KeyCode::Enter => Some(WizardAction::MoveDown),
        KeyCode::Backspace => Some(WizardAction::Backspace),
        // 'q' is never valid numeric input, so it stays bound to quit
        KeyCode::Char(c)
            if c != 'q'
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(WizardAction::Type(c))
        }
        _ => None,
    }
}

pub fn determine_analyze_action(key: KeyEvent) -> Option<WizardAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(WizardAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(WizardAction::MoveDown),
        KeyCode::Enter => Some(WizardAction::Next),
        _ => None,
    }
}

pub fn determine_dialog_action(key: KeyEvent, kind: DialogKind) -> Option<DialogAction> {
    match kind {
        DialogKind::Alert => Some(DialogAction::Dismiss),
        DialogKind::Confirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(DialogAction::Confirm)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(DialogAction::Cancel),
            _ => None,
        },
    }
}
