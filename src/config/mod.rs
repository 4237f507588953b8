//! Configuration file support.
//!
//! `.qmsim.toml` is looked up in the working directory and its ancestors,
//! then in the user config directory. An explicit `--config` path skips
//! discovery and makes any problem with the file fatal.

mod core;
mod loader;

pub use core::{OutputConfig, QmsimConfig};
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
