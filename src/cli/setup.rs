//! Runtime setup shared by the commands.

use crate::catalog::Catalog;
use crate::config::{load_config, QmsimConfig};
use crate::formatting::FormattingConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Everything a command needs after startup.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: QmsimConfig,
    pub catalog: Catalog,
    pub formatting: FormattingConfig,
}

impl RunContext {
    pub fn project_name(&self) -> &str {
        self.config.project_name()
    }
}

/// Load configuration, build the catalog and resolve output formatting.
pub fn load_run_context(config_path: Option<&Path>, plain: bool) -> Result<RunContext> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let catalog = Catalog::from_config(&config).context("Invalid configuration")?;
    let formatting = FormattingConfig::resolve(plain, config.use_color());
    Ok(RunContext {
        config,
        catalog,
        formatting,
    })
}
