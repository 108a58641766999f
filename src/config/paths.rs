//! Config file location: explicit path, then `SEARXNG_CONFIG`, then the per-user config dir.

use crate::error::ApiError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default config file location.
pub const CONFIG_ENV_VAR: &str = "SEARXNG_CONFIG";

const APP_DIR: &str = "searxngcli";
const CONFIG_FILE_NAME: &str = "config.yml";

/// Default config file: `<user config dir>/searxngcli/config.yml`.
///
/// On Linux this honours `XDG_CONFIG_HOME`, falling back to `~/.config`.
pub fn default_config_path() -> Result<PathBuf, ApiError> {
    let dirs = ProjectDirs::from("", "", APP_DIR).ok_or_else(|| {
        ApiError::ConfigError("Could not determine the user config directory".to_string())
    })?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Resolve the config file path. Precedence: explicit argument, environment, default.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ApiError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_config_path(),
    }
}
