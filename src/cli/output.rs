//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;
use owo_colors::{OwoColorize, Stream};

/// Map domain/service errors to the one-line `Error: ...` message printed on stderr.
pub fn map_error(e: &ApiError) -> String {
    let message = format!("Error: {}", e);
    message
        .if_supports_color(Stream::Stderr, |t| t.red())
        .to_string()
}
