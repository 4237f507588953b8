//! CLI module for qmsim
//!
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::{Cli, Commands, MetricArg, ReportArgs, WeightArg};
pub use commands::{
    handle_catalog_command, handle_init_command, handle_report_command, handle_wizard_command,
    run_report,
};
pub use setup::{load_run_context, RunContext};

use crate::observability::set_command;
use anyhow::Result;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    <Cli as clap::Parser>::parse()
}

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let load = || load_run_context(cli.config.as_deref(), cli.plain);

    match cli.command.clone().unwrap_or(Commands::Wizard) {
        // init must work even when an existing config is broken
        Commands::Init { force } => {
            set_command("init");
            handle_init_command(force)
        }
        Commands::Wizard => {
            set_command("wizard");
            handle_wizard_command(&load()?)
        }
        Commands::Report(args) => {
            set_command("report");
            handle_report_command(&load()?, &args)
        }
        Commands::Catalog => {
            set_command("catalog");
            handle_catalog_command(&load()?)
        }
    }
}
