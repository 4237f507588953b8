use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn handle_init_command(force: bool) -> Result<()> {
    let path = init_config_at(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default configuration into `dir`.
pub fn init_config_at(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, default_config_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "Configuration written");
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config_at(dir.path(), false).unwrap();
        assert!(init_config_at(dir.path(), false).is_err());
        init_config_at(dir.path(), true).unwrap();
    }

    #[test]
    fn test_written_config_loads() {
        let dir = TempDir::new().unwrap();
        let path = init_config_at(dir.path(), false).unwrap();
        let config = crate::config::load_config(Some(&path)).unwrap();
        assert_eq!(config.project_name(), "My ISO 15939 Project");
    }
}
