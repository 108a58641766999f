//! Error types for the SearXNG command-line client.

use std::path::PathBuf;
use thiserror::Error;

/// Minimal config file shown to users who have not created one yet.
pub const CONFIG_EXAMPLE: &str = "base_url: https://searxng.example.com";

/// Longest slice of an HTTP error body echoed in the one-line message.
const BODY_PREVIEW_CHARS: usize = 200;

/// Errors surfaced by config handling, the API client and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(
        "Config file not found: {}\nCreate it with your SearXNG instance URL. Example:\n\n{}",
        path.display(),
        CONFIG_EXAMPLE
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config file {}: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Unknown config key: {0} (available keys: base_url)")]
    UnknownConfigKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error ({kind}) contacting {url}: {source}")]
    NetworkError {
        url: String,
        kind: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}{}", body_preview(body))]
    HttpStatusError {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Invalid response from SearXNG: {0}")]
    InvalidResponse(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl ApiError {
    /// HTTP status for `HttpStatusError`, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatusError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn body_preview(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut preview: String = trimmed.chars().take(BODY_PREVIEW_CHARS).collect();
    if trimmed.chars().count() > BODY_PREVIEW_CHARS {
        preview.push_str("...");
    }
    format!(": {}", preview.replace('\n', " "))
}
