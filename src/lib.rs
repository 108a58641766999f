//! SearXNG CLI
//!
//! Command-line client for a SearXNG metasearch instance: a one-key YAML config store, typed
//! response records, an HTTP client for `/search` and `/config`, and a command dispatcher.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

/// Crate version reported by `--version` and the HTTP user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
