pub mod catalog;
pub mod init;
pub mod report;
pub mod wizard;

pub use catalog::handle_catalog_command;
pub use init::{handle_init_command, init_config_at};
pub use report::{handle_report_command, run_report};
pub use wizard::handle_wizard_command;
