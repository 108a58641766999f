//! Shared presentation: terminal styling that degrades to plain text off a TTY.

use crate::error::ApiError;
use owo_colors::{OwoColorize, Stream};

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
}

pub fn dim(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

pub fn dim_italic(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed().italic().to_string())
        .to_string()
}

pub fn green(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

pub fn yellow(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.yellow())
        .to_string()
}

/// Pretty-print a JSON value for stdout.
pub fn to_pretty_json(value: &serde_json::Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to render JSON: {}", e)))
}
