//! Thread-local session context for crash reports.
//!
//! Records which wizard step and which command were active so a panic
//! report can say where the session was.

use crate::wizard::Step;
use std::cell::RefCell;

thread_local! {
    static CURRENT_CONTEXT: RefCell<SessionContext> = const { RefCell::new(SessionContext::new()) };
}

/// Snapshot of what qmsim was doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Active wizard step
    pub step: Option<Step>,
    /// Command being executed (e.g. "report")
    pub command: Option<&'static str>,
}

impl SessionContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: None,
            command: None,
        }
    }
}

/// Record the active wizard step. Persists until the next call.
pub fn set_step(step: Step) {
    CURRENT_CONTEXT.with(|ctx| {
        ctx.borrow_mut().step = Some(step);
    });
}

/// Record the command being executed.
pub fn set_command(command: &'static str) {
    CURRENT_CONTEXT.with(|ctx| {
        ctx.borrow_mut().command = Some(command);
    });
}

/// Get the current context snapshot.
///
/// Called by the panic hook to include context in crash reports.
#[must_use]
pub fn get_current_context() -> SessionContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
