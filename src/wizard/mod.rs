//! The four-step measurement wizard.
//!
//! - [`selector`]: Define step, scenario and characteristic selection
//! - [`allocator`]: Plan step, weights and automatic distribution
//! - [`collector`]: Collect step, metric loading and value entry
//! - [`step`]: step state machine, transition table and gate guards
//! - [`controller`]: the [`Wizard`] owning state and step cursor
//!
//! Views never mutate [`ProjectState`](crate::core::ProjectState) directly;
//! they send a [`WizardMessage`] to [`Wizard::dispatch`].

pub mod allocator;
pub mod collector;
pub mod controller;
pub mod message;
pub mod selector;
pub mod step;

pub use controller::Wizard;
pub use message::WizardMessage;
pub use step::{GateError, NavigationResult, Step, TRANSITIONS};
