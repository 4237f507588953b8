use crate::cli::setup::RunContext;
use crate::tui::WizardTui;
use crate::wizard::Wizard;
use anyhow::Result;
use std::io::IsTerminal;

pub fn handle_wizard_command(ctx: &RunContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "The interactive wizard needs a terminal. Use `qmsim report` for scripted runs."
        );
    }

    let wizard = Wizard::new(ctx.catalog.clone(), ctx.project_name());
    tracing::debug!(project = ctx.project_name(), "Starting wizard");
    let mut tui = WizardTui::new(wizard)?;
    tui.run()
}
