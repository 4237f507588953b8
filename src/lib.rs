//! ISO 15939 measurement process simulator over the ISO 25010 quality model.
//!
//! A measurement walks through four steps: **Define** the quality
//! characteristics to measure, **Plan** their weights, **Collect** metric
//! values and **Analyze** the weighted result. The [`wizard::Wizard`]
//! controller owns the session; the TUI and the `report` command both drive
//! it through the same guarded transitions.
//!
//! ```rust
//! use qmsim::core::ScenarioId;
//! use qmsim::wizard::{NavigationResult, Wizard, WizardMessage};
//!
//! let mut wizard = Wizard::default();
//! wizard.dispatch(WizardMessage::SelectScenario(ScenarioId::Mobile))?;
//! while !wizard.step().is_final() {
//!     assert!(matches!(wizard.next(), NavigationResult::Advanced(_)));
//! }
//! assert_eq!(wizard.analysis().overall_display(), "80.3");
//! # Ok::<(), qmsim::errors::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod observability;
pub mod output;
pub mod scoring;
pub mod tui;
pub mod wizard;

pub use crate::catalog::Catalog;
pub use crate::core::{CharacteristicId, ProjectState, ScenarioId};
pub use crate::errors::{Error, Result};
pub use crate::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::scoring::{analyze, Analysis, Rating};
pub use crate::wizard::{NavigationResult, Step, Wizard, WizardMessage};
