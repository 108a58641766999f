//! Config command presentation: show and set confirmations.

use crate::cli::presentation::shared::{dim, green, to_pretty_json};
use crate::config::SearxngConfig;
use crate::error::ApiError;
use serde_json::json;
use std::path::Path;

pub fn format_config_show(config: &SearxngConfig, path: &Path) -> Result<String, ApiError> {
    let body = to_pretty_json(&json!({ "base_url": config.base_url }))?;
    Ok(format!(
        "{}\n\n{}",
        body,
        dim(&format!("Config file: {}", path.display()))
    ))
}

pub fn format_config_set(key: &str, value: &str, path: &Path) -> String {
    format!(
        "{}\n{}",
        green(&format!("Set {} = {}", key, value)),
        dim(&format!("Config file: {}", path.display()))
    )
}
