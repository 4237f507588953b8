//! Observability: logging setup and crash reports.
//!
//! ## Usage
//!
//! ```ignore
//! use qmsim::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//!     // ... rest of application
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{get_current_context, set_command, set_step, SessionContext};
pub use panic_hook::install_panic_hook;
pub use tracing::{init_tracing, is_tui_active, set_tui_active};
