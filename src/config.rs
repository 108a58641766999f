//! Configuration System
//!
//! A single persisted setting, the `base_url` of the SearXNG instance, stored as YAML.
//! Loading goes through the `config` crate; saving serializes exactly `{base_url: ...}`.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

mod paths;

pub use paths::{default_config_path, resolve_path, CONFIG_ENV_VAR};

/// The only key `config set` accepts.
pub const BASE_URL_KEY: &str = "base_url";

/// Persisted CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearxngConfig {
    /// Instance URL without trailing slashes
    pub base_url: String,
}

impl SearxngConfig {
    /// Build a config from a raw URL, normalizing it the same way `load` does.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// Apply `key = value`. Rejects unknown keys and values that normalize to nothing;
    /// on error `self` is left untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ApiError> {
        if key != BASE_URL_KEY {
            return Err(ApiError::UnknownConfigKey(key.to_string()));
        }
        let normalized = normalize_base_url(value);
        if normalized.is_empty() {
            return Err(ApiError::ConfigError(format!(
                "'{}' must not be empty",
                BASE_URL_KEY
            )));
        }
        self.base_url = normalized;
        Ok(())
    }
}

/// Trim surrounding whitespace, then strip every trailing `/`.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Loads, saves, and edits the config file at a resolved path.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the config path from an optional explicit argument. See [`resolve_path`].
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ApiError> {
        resolve_path(explicit)
    }

    /// Load and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<SearxngConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Yaml))
            .build()
            .map_err(|e| ApiError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let raw = match settings.get::<Option<String>>(BASE_URL_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(config::ConfigError::NotFound(_)) => String::new(),
            Err(e) => {
                return Err(ApiError::ConfigInvalid {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        let base_url = normalize_base_url(&raw);
        if base_url.is_empty() {
            return Err(ApiError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: format!("missing '{}'", BASE_URL_KEY),
            });
        }

        debug!(config_path = %path.display(), base_url = %base_url, "Loaded config");
        Ok(SearxngConfig { base_url })
    }

    /// Write `config` to `path`, creating parent directories and replacing any existing file.
    pub fn save(config: &SearxngConfig, path: &Path) -> Result<(), ApiError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ApiError::ConfigError(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let contents = serde_yaml::to_string(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        let write_err = |e: std::io::Error| {
            ApiError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        };
        let mut file = fs::File::create(path).map_err(write_err)?;
        file.write_all(contents.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        debug!(config_path = %path.display(), "Saved config");
        Ok(())
    }

    /// Set `key` to `value` in the config at `path` and persist it.
    ///
    /// Unknown keys and values that normalize to nothing fail before the file is read or
    /// written. A missing or invalid file is replaced by a fresh config holding only the
    /// new value.
    pub fn set(path: &Path, key: &str, value: &str) -> Result<SearxngConfig, ApiError> {
        if key != BASE_URL_KEY {
            return Err(ApiError::UnknownConfigKey(key.to_string()));
        }
        if normalize_base_url(value).is_empty() {
            return Err(ApiError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: format!("'{}' must not be empty", BASE_URL_KEY),
            });
        }

        let mut config = match Self::load(path) {
            Ok(config) => config,
            Err(ApiError::ConfigNotFound { .. }) | Err(ApiError::ConfigInvalid { .. }) => {
                SearxngConfig::default()
            }
            Err(e) => return Err(e),
        };

        config.set(key, value)?;

        Self::save(&config, path)?;
        Ok(config)
    }
}
