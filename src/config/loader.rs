use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::QmsimConfig;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".qmsim.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str, path: &Path) -> Result<QmsimConfig> {
    let config = toml::from_str::<QmsimConfig>(contents).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Load a config file named explicitly by the user. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<QmsimConfig> {
    let contents = read_config_file(path)?;
    let config = parse_and_validate_config(&contents, path)?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Try loading a discovered config; problems are logged and skipped
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<QmsimConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents, config_path) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<user config dir>/qmsim/config.toml`, if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qmsim").join("config.toml"))
}

/// Search `start` and its ancestors, then the user config directory.
pub fn discover_config(start: PathBuf) -> QmsimConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            QmsimConfig::default()
        })
}

/// Load the explicit config if given, otherwise discover one.
pub fn load_config(explicit: Option<&Path>) -> Result<QmsimConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(QmsimConfig::default())
        }
    }
}

/// Contents written by `qmsim init`.
pub fn default_config_toml() -> &'static str {
    r#"# qmsim configuration

project_name = "My ISO 15939 Project"

[output]
default_format = "terminal"

# Replace the metrics of a characteristic (func, perf, comp, usab, rel, sec, maint, port).
# [metrics]
# perf = [
#     { id = "m_perf_1", name = "Mean Response Time", desc = "Average time to respond to user input", unit = "ms", min = 0, max = 5000, default = 200, inverse = true },
# ]

# Replace the advice given when a characteristic scores below 80.
# [recommendations]
# sec = "Conduct a security audit, enforce strong authentication, and review data encryption protocols."
"#
}
