//! Location of the user configuration file (`~/.config/finder/config.toml`)

use std::env;
use std::path::PathBuf;

use crate::error::{FinderError, Result};

const CONFIG_DIR: &str = "finder";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "FINDER_CONFIG_DIR";

/// Directory named by `FINDER_CONFIG_DIR`, if set and non-empty
fn overridden_dir() -> Option<PathBuf> {
    env::var_os(CONFIG_DIR_ENV_VAR)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

/// Path of the default configuration file
pub fn config_path() -> Result<PathBuf> {
    let dir = match overridden_dir() {
        Some(dir) => dir,
        None => dirs::config_dir()
            .map(|base| base.join(CONFIG_DIR))
            .ok_or_else(|| FinderError::Other("no user configuration directory".to_string()))?,
    };
    Ok(dir.join(CONFIG_FILE))
}

/// Human label for where the default configuration comes from
pub fn source_display() -> String {
    match overridden_dir() {
        Some(dir) => format!("${} ({})", CONFIG_DIR_ENV_VAR, dir.display()),
        None => format!("~/.config/{}/{}", CONFIG_DIR, CONFIG_FILE),
    }
}
